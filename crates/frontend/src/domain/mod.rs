pub mod a001_additional_service;
pub mod a002_company_reference;
pub mod a003_center_activity;
