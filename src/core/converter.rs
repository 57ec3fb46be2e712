use crate::config::RenderOptions;
use crate::core::encoder::{encode, parse};
use crate::core::render::render;
use crate::core::TimeConverter;
use crate::domain::model::{FiveRowDisplay, TimeOfDay};
use crate::utils::error::Result;

/// Converts `HH:MM:SS` text into a rendered Berlin clock.
#[derive(Debug, Clone, Default)]
pub struct BerlinClock {
    options: RenderOptions,
}

impl BerlinClock {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn display(&self, input: Option<&str>) -> Result<FiveRowDisplay> {
        Ok(encode(parse(input)?))
    }

    pub fn render_time(&self, time: TimeOfDay) -> Result<String> {
        let lamps = encode(time);
        tracing::debug!("Encoded {} as {:?}", time, lamps.rows());
        render(&lamps, self.options.format, self.options.line_separator)
    }
}

impl TimeConverter for BerlinClock {
    fn convert(&self, input: Option<&str>) -> Result<String> {
        self.render_time(parse(input)?)
    }
}
