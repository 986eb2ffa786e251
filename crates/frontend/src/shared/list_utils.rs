/// Utilidades de listas: ordenamiento y paginación en el cliente
use std::cmp::Ordering;

/// Tipos que se pueden ordenar por nombre de columna
pub trait Sortable {
    /// Compara dos filas por la columna indicada
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Columna y dirección de orden de una tabla
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub ascending: bool,
}

impl SortState {
    pub fn new(field: &str, ascending: bool) -> Self {
        Self {
            field: field.to_string(),
            ascending,
        }
    }

    /// Clic en el encabezado: misma columna invierte, otra columna ordena ascendente
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.ascending = !self.ascending;
        } else {
            self.field = field.to_string();
            self.ascending = true;
        }
    }
}

/// Ordena la lista por la columna indicada (orden estable)
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending { cmp } else { cmp.reverse() }
    });
}

/// Compara textos opcionales sin distinguir mayúsculas; vacíos al final
pub fn compare_text(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.map(str::trim).filter(|s| !s.is_empty());
    let b = b.map(str::trim).filter(|s| !s.is_empty());
    match (a, b) {
        (Some(a), Some(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Cantidad de páginas (al menos una)
pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    total_count.div_ceil(page_size).max(1)
}

/// Filas de la página `page` (0-indexada); página fuera de rango da lista vacía
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_mul(page_size);
    if page_size == 0 || start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Indicador de orden para el encabezado
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

/// Clase CSS del indicador (activo / inactivo)
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "sort-icon active"
    } else {
        "sort-icon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str, i32);

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => compare_text(Some(self.0), Some(other.0)),
                _ => self.1.cmp(&other.1),
            }
        }
    }

    #[test]
    fn test_sort_toggle() {
        let mut sort = SortState::new("name", true);
        sort.toggle("name");
        assert!(!sort.ascending);
        sort.toggle("value");
        assert_eq!(sort, SortState::new("value", true));
    }

    #[test]
    fn test_sort_list() {
        let mut rows = vec![Row("b", 2), Row("A", 3), Row("c", 1)];
        sort_list(&mut rows, "name", true);
        assert_eq!(rows[0], Row("A", 3));
        sort_list(&mut rows, "value", false);
        assert_eq!(rows[0], Row("A", 3));
        assert_eq!(rows[2], Row("c", 1));
    }

    #[test]
    fn test_compare_text_blanks_last() {
        assert_eq!(compare_text(Some("x"), None), Ordering::Less);
        assert_eq!(compare_text(Some(" "), Some("a")), Ordering::Greater);
    }

    #[test]
    fn test_pagination() {
        let items: Vec<i32> = (0..26).collect();
        assert_eq!(total_pages(items.len(), 25), 2);
        assert_eq!(total_pages(0, 25), 1);
        assert_eq!(page_slice(&items, 1, 25), vec![25]);
        assert!(page_slice(&items, 2, 25).is_empty());
        assert_eq!(page_slice(&items, 0, 10).len(), 10);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("a", "a", true), " ▲");
        assert_eq!(get_sort_indicator("a", "a", false), " ▼");
        assert_eq!(get_sort_indicator("a", "b", true), " ⇅");
        assert_eq!(get_sort_class("a", "a"), "sort-icon active");
    }
}
