pub mod p900_document_records;
