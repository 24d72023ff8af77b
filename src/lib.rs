pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod verify_receipt_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod verify_receipt {
            pub(crate) mod common;
            pub(crate) mod in_app_receipt_model;
            pub(crate) mod receipt_model;
            pub(crate) mod request_body_model;
            pub(crate) mod response_body_model;
        }
    }
    pub(crate) mod repositories {
        pub(crate) mod receipt_decoding;
        pub(crate) mod receipt_validation_repository_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod decoded_receipt;
        pub mod environment;
        pub mod in_app_purchase_receipt;
        pub mod receipt_info;
        pub mod response_classification;
        pub mod validation_outcome;
    }
    pub mod repositories {
        pub mod receipt_validation_repository;
    }
}

pub mod config;
pub(crate) mod constants;
pub mod errors;
pub mod util;

/// HTTP transport used by the validator. Implement `VerifyReceiptDatasource`
/// to supply a custom one.
pub mod transport {
    pub use crate::data::datasources::verify_receipt_datasource::{
        RawHttpResponse, VerifyReceiptDatasource, VerifyReceiptDatasourceImpl,
    };
}
