pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod receipt_payload_datasource;
    }
    pub(crate) mod models {
        pub(crate) mod play_billing {
            pub(crate) mod receipt_payload_model;
        }
    }
}

pub mod domain {
    pub mod entities {
        pub mod purchase_envelope;
        pub mod purchase_record;
        pub mod purchase_state;
    }
}

pub mod errors;
pub mod util;
