use bufferless_text::prelude::*;

const TITLE: &str = "Hello World";
const TITLE_ORIGIN: Vec3 = Vec3::new(-0.5, 0.5, 0.0);
const TITLE_SCALE: f32 = 0.2;

/// the demo scene: four lines of text at different sizes
pub struct App {
    lines: Vec<TextDrawRequest<'static>>,
}

impl App {
    pub fn new() -> Self {
        Self {
            lines: vec![
                TextDrawRequest::uniform(
                    "There is room for improvement",
                    vec3(-1.0, 0.0, 0.0),
                    0.1,
                ),
                TextDrawRequest::uniform(
                    "But for a basic tutorial, it works, and gets the job done",
                    vec3(-0.75, -0.5, 0.0),
                    0.05,
                ),
                TextDrawRequest::uniform(
                    "It works best with small text",
                    vec3(0.0, -1.0, 0.0),
                    0.05,
                ),
            ],
        }
    }
}

impl TextApp for App {
    fn init(&mut self, _video: &mut VideoSystem) {
        log::info!("drawing {} lines of text per frame", self.lines.len() + 1);
    }

    fn on_frame_update(&mut self, text: &TextRenderer) -> Result<(), TextError> {
        let title_scale = vec3(TITLE_SCALE, TITLE_SCALE, TITLE_SCALE);
        text.draw_text(TITLE, &TITLE_ORIGIN, &title_scale)?;
        for line in self.lines.iter() {
            text.draw(line)?;
        }
        Ok(())
    }
}
