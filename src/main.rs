use crate::app::*;
use bufferless_text::engine_builder::EngineAttributes;
use env_logger::Env;
use std::error::Error;

mod app;

fn main() -> Result<(), Box<dyn Error>> {
    let env = Env::default()
        .filter_or("LOG_LVL", "info")
        .write_style_or("LOG_STYLE", "always");
    env_logger::init_from_env(env);

    let app = App::new();
    let mut engine = EngineAttributes::new().build_engine()?;

    engine.run(app)
}
