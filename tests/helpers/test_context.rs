//! Test context for unified test setup
//!
//! Builds the services and the application context over the built-in seed
//! data, or over an empty dataset, with optional settings overrides.

use HoopBuddy::config::Settings;
use HoopBuddy::database::{DatabaseService, SeedData};
use HoopBuddy::handlers::{handle_line, LineOutcome};
use HoopBuddy::services::ServiceFactory;
use HoopBuddy::state::AppContext;

/// Configuration for test context
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub use_seed: bool,
    pub decrement_on_cancel: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            use_seed: true,
            decrement_on_cancel: false,
        }
    }
}

pub fn test_settings(config: &TestConfig) -> Settings {
    let mut settings = Settings::default();
    settings.gatherings.decrement_on_cancel = config.decrement_on_cancel;
    settings
}

/// Services over the built-in seed
pub fn seeded_services() -> ServiceFactory {
    services_with_config(TestConfig::default())
}

pub fn services_with_config(config: TestConfig) -> ServiceFactory {
    let seed = if config.use_seed {
        builtin_seed()
    } else {
        SeedData::default()
    };
    services_from_seed(seed, config)
}

pub fn builtin_seed() -> SeedData {
    SeedData::builtin().expect("built-in seed must parse")
}

/// Services over a caller-adjusted seed
pub fn services_from_seed(seed: SeedData, config: TestConfig) -> ServiceFactory {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    ServiceFactory::new(DatabaseService::new(seed), test_settings(&config))
}

/// Application context over the built-in seed
pub fn seeded_context() -> AppContext {
    let config = TestConfig::default();
    AppContext::with_default_profiles(test_settings(&config), services_with_config(config))
}

/// Context already logged in under `name` with the given role key
pub fn logged_in_context(name: &str, role: &str) -> AppContext {
    let mut ctx = seeded_context();
    run(&mut ctx, &format!("login {}", name));
    run(&mut ctx, &format!("role {}", role));
    ctx
}

/// Run a console line that must succeed, returning its reply
pub fn run(ctx: &mut AppContext, line: &str) -> String {
    match handle_line(ctx, line) {
        Ok(LineOutcome::Reply(text)) => text,
        Ok(other) => panic!("line {:?} produced {:?}", line, other),
        Err(e) => panic!("line {:?} failed: {}", line, e),
    }
}
