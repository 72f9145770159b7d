pub mod shared {
    pub mod core {
        pub mod errors;
        pub mod identity;
    }
    pub mod infrastructure {
        pub mod config;
        pub mod database;
        pub mod in_memory;
    }
}

pub mod modules {
    pub mod shows {
        pub mod core {
            pub mod projection;
            pub mod show;
        }
        pub mod use_cases {
            pub mod create_show {
                pub mod command;
                pub mod handler;
                pub mod port;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_show {
                pub mod handler;
                pub mod port;
                pub mod query;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory;
                pub mod postgres;
                pub mod repository;
            }
        }
    }
    pub mod episodes {
        pub mod core {
            pub mod episode;
        }
        pub mod use_cases {
            pub mod create_episode {
                pub mod command;
                pub mod handler;
                pub mod port;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_episode {
                pub mod handler;
                pub mod port;
                pub mod query;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory;
                pub mod postgres;
                pub mod repository;
            }
        }
    }
    pub mod distributions {
        pub mod core {
            pub mod distribution;
        }
        pub mod use_cases {
            pub mod create_distribution {
                pub mod command;
                pub mod handler;
                pub mod port;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_distribution {
                pub mod handler;
                pub mod port;
                pub mod query;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory;
                pub mod postgres;
                pub mod repository;
            }
        }
    }
}

pub mod shell;
