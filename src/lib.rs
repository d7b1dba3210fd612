// Crate entry point. Declares and exposes modules so tests and the shell binary can reach them.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod key_value_store;
    }
}

pub mod modules {
    pub mod time_tracking {
        pub mod core {
            pub mod employee;
            pub mod ports;
            pub mod seed;
            pub mod session;
            pub mod time_entry;
        }
        pub mod use_cases {
            pub mod login {
                pub mod command;
                pub mod decide;
                pub mod decision;
            }
            pub mod clock_in {
                pub mod decide;
                pub mod decision;
            }
            pub mod clock_out {
                pub mod decide;
                pub mod decision;
            }
            pub mod manage_roster {
                pub mod command;
                pub mod decide;
                pub mod decision;
            }
            pub mod list_time_entries {
                pub mod queries;
            }
        }
        pub mod application {
            pub mod errors;
            pub mod store;
        }
        pub mod adapters {
            pub mod outbound {
                pub mod key_value_repository;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod test_support {
    pub mod fixtures {
        pub mod employees;
        pub mod store;
    }
}
