pub mod application {
    pub mod chat {
        pub mod send_message;
    }
    pub mod transcript {
        pub mod get_transcript;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod chat {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod send_message;
        }
    }
    pub mod session {
        pub mod repository;
    }
    pub mod transcript {
        pub mod errors;
        pub mod extract;
        pub mod model;
        pub mod services;
        pub mod value_objects;
        pub mod use_cases {
            pub mod get_transcript;
        }
    }
}
