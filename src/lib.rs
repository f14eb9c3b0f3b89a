pub mod shared {
    pub mod http {
        pub mod api_error;
        pub mod payload;
    }
    pub mod infrastructure {
        pub mod person_store;
    }
}

pub mod modules {
    pub mod persons {
        pub mod core {
            pub mod person;
            pub mod validate;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod list_persons {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_person {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_person {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod replace_person {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_person {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
