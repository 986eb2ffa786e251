pub mod a001_additional_service;
pub mod a002_company_reference;
