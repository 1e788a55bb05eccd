pub mod application {
    pub mod cart {
        pub mod abandon;
        pub mod add_line;
        pub mod checkout;
        pub mod get_by_id;
        pub mod purge_idle;
        pub mod scan;
        pub mod start;
        pub mod sub_line;
    }
    pub mod catalog {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod lookup;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod abandon;
            pub mod add_line;
            pub mod checkout;
            pub mod get_by_id;
            pub mod purge_idle;
            pub mod scan;
            pub mod start;
            pub mod sub_line;
        }
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod lookup;
        }
    }
}
