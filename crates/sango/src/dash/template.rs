use std::sync::LazyLock;

use regex::{Captures, Regex};

// From https://dashif.org/docs/DASH-IF-IOP-v4.3.pdf: only %0[width]d is
// permitted as a format suffix, so the substitution can be done without a
// printf reimplementation.
//
// Example template: "chunk_$RepresentationID$_$Number%06d$.m4s"
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(RepresentationID|Number|Time)(?:%0(\d+)d)?\$").unwrap()
});

/// Media-template substitution context for one representation. Only the
/// placeholders set on the context are substituted; everything else is left
/// untouched.
pub(crate) struct MediaTemplate<'a> {
    representation_id: &'a str,
    number: Option<u64>,
    time: Option<u64>,
}

impl<'a> MediaTemplate<'a> {
    pub fn for_representation(representation_id: &'a str) -> Self {
        Self {
            representation_id,
            number: None,
            time: None,
        }
    }

    pub fn number(mut self, number: u64) -> Self {
        self.number = Some(number);
        self
    }

    pub fn time(mut self, time: u64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn resolve(&self, template: &str) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                let value = match &caps[1] {
                    "RepresentationID" => Some(self.representation_id.to_string()),
                    "Number" => self.number.map(|n| n.to_string()),
                    "Time" => self.time.map(|t| t.to_string()),
                    _ => None,
                };
                let Some(value) = value else {
                    return caps[0].to_string();
                };

                match caps.get(2) {
                    Some(width) => {
                        let width: usize = width.as_str().parse().unwrap();
                        format!("{value:0>width$}")
                    }
                    None => value,
                }
            })
            .to_string()
    }
}
