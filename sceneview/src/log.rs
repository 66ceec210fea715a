use std::env;

use tracing_subscriber::EnvFilter;

pub fn set(env_filter: String) {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", env_filter);
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();
}
