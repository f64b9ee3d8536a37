use std::fmt;

use crate::{
    form::{DisplayState, LookupForm},
    model::LookupResult,
};

pub const TITLE: &str = "Lookup Weather by ID";
pub const DESCRIPTION: &str = "Enter your weather request ID to view stored results.";
pub const FIELD_LABEL: &str = "Weather Request ID";
pub const PLACEHOLDER: &str = "e.g., 123e4567-e89b-12d3-a456-426614174000";
pub const SUBMIT_LABEL: &str = "Get Weather Data";
pub const LOADING_LABEL: &str = "Looking up...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultPanel {
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    None,
    Error(String),
    Result(ResultPanel),
}

/// Everything needed to draw the form once.
#[derive(Debug, Clone, PartialEq)]
pub struct FormView {
    pub identifier: String,
    pub submit: SubmitButton,
    pub panel: Panel,
}

/// Pure function of the form state.
pub fn render(form: &LookupForm) -> FormView {
    let submit = if form.is_loading() {
        SubmitButton {
            label: LOADING_LABEL,
            disabled: true,
        }
    } else {
        SubmitButton {
            label: SUBMIT_LABEL,
            disabled: false,
        }
    };

    let panel = match (form.display_state(), form.result()) {
        (DisplayState::Error, _) => Panel::Error(form.error_message().to_string()),
        (DisplayState::Result, Some(result)) => Panel::Result(result_panel(result)),
        _ => Panel::None,
    };

    FormView {
        identifier: form.identifier().to_string(),
        submit,
        panel,
    }
}

fn result_panel(result: &LookupResult) -> ResultPanel {
    let mut lines = vec![
        "Your weather info is:".to_string(),
        format!("Date: {}", result.date),
        format!("Location: {}", result.location),
    ];

    if let Some(notes) = result.notes() {
        lines.push(format!("Notes: {notes}"));
    }

    // f64's Display prints 21.0 as "21"
    lines.push(format!("Temperature: {}°C", result.temperature_c()));
    lines.push(format!(
        "Condition: {}",
        result.condition().unwrap_or("Unknown")
    ));

    ResultPanel { lines }
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f, "{DESCRIPTION}")?;
        writeln!(f)?;

        let value = if self.identifier.is_empty() {
            PLACEHOLDER
        } else {
            self.identifier.as_str()
        };
        writeln!(f, "{FIELD_LABEL}: {value}")?;

        if self.submit.disabled {
            writeln!(f, "[ {} ] (disabled)", self.submit.label)?;
        } else {
            writeln!(f, "[ {} ]", self.submit.label)?;
        }

        match &self.panel {
            Panel::None => {}
            Panel::Error(message) => {
                writeln!(f)?;
                writeln!(f, "! {message}")?;
            }
            Panel::Result(panel) => {
                writeln!(f)?;
                for line in &panel.lines {
                    writeln!(f, "  {line}")?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        LookupError,
        model::{CurrentConditions, WeatherSnapshot},
    };

    fn record(notes: Option<&str>, temperature: f64, descriptions: &[&str]) -> LookupResult {
        LookupResult {
            date: "2025-06-01".into(),
            location: "Berlin".into(),
            notes: notes.map(str::to_string),
            weather: WeatherSnapshot {
                current: CurrentConditions {
                    temperature,
                    weather_descriptions: descriptions.iter().map(|d| d.to_string()).collect(),
                },
            },
        }
    }

    fn form_with(outcome: Result<LookupResult, LookupError>) -> LookupForm {
        let mut form = LookupForm::new();
        form.set_identifier("abc-123");
        let pending = form.begin_lookup().expect("non-blank identifier");
        form.settle(pending, outcome);
        form
    }

    #[test]
    fn idle_form_has_enabled_button_and_no_panel() {
        let view = render(&LookupForm::new());

        assert_eq!(view.submit.label, SUBMIT_LABEL);
        assert!(!view.submit.disabled);
        assert_eq!(view.panel, Panel::None);
    }

    #[test]
    fn loading_disables_submit() {
        let mut form = LookupForm::new();
        form.set_identifier("abc");
        let pending = form.begin_lookup().expect("non-blank identifier");

        let view = render(&form);
        assert_eq!(
            view.submit,
            SubmitButton {
                label: LOADING_LABEL,
                disabled: true
            }
        );
        assert_eq!(view.panel, Panel::None);

        form.settle(pending, Err(LookupError::NotFound { status: 404 }));
        assert!(!render(&form).submit.disabled);
    }

    #[test]
    fn result_panel_shows_exact_lines() {
        let view = render(&form_with(Ok(record(
            Some("Bring an umbrella"),
            21.0,
            &["Light rain", "Overcast"],
        ))));

        let Panel::Result(panel) = view.panel else {
            panic!("expected result panel");
        };
        assert_eq!(
            panel.lines,
            vec![
                "Your weather info is:",
                "Date: 2025-06-01",
                "Location: Berlin",
                "Notes: Bring an umbrella",
                "Temperature: 21°C",
                "Condition: Light rain",
            ]
        );
    }

    #[test]
    fn notes_line_omitted_when_absent_or_empty() {
        for notes in [None, Some("")] {
            let view = render(&form_with(Ok(record(notes, 3.5, &["Snow"]))));
            let Panel::Result(panel) = view.panel else {
                panic!("expected result panel");
            };
            assert!(panel.lines.iter().all(|l| !l.starts_with("Notes:")));
            assert!(panel.lines.contains(&"Temperature: 3.5°C".to_string()));
        }
    }

    #[test]
    fn empty_descriptions_render_unknown_condition() {
        let view = render(&form_with(Ok(record(None, -2.0, &[]))));
        let Panel::Result(panel) = view.panel else {
            panic!("expected result panel");
        };
        assert_eq!(panel.lines.last().map(String::as_str), Some("Condition: Unknown"));
        assert!(panel.lines.contains(&"Temperature: -2°C".to_string()));
    }

    #[test]
    fn error_panel_shows_message_only() {
        let view = render(&form_with(Err(LookupError::NotFound { status: 404 })));
        assert_eq!(view.panel, Panel::Error("Weather data not found.".into()));
    }

    #[test]
    fn text_output_contains_form_and_panel() {
        let text = render(&form_with(Err(LookupError::transport("connection refused")))).to_string();

        assert!(text.starts_with(TITLE));
        assert!(text.contains("Weather Request ID: abc-123"));
        assert!(text.contains("[ Get Weather Data ]"));
        assert!(text.contains("! connection refused"));
    }

    #[test]
    fn text_output_shows_placeholder_for_empty_identifier() {
        let text = render(&LookupForm::new()).to_string();
        assert!(text.contains(PLACEHOLDER));
        assert!(!text.contains("(disabled)"));
    }
}
