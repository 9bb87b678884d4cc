//! Template rendering for the question page and the console client.

use minijinja::{context, Environment};
use qiyas_common::{error::Result, QiyasError};

use super::cycle::AskCycle;

const BASE_HTML: &str = include_str!("../../templates/base.html");
const INDEX_HTML: &str = include_str!("../../templates/index.html");
const OUTCOME_HTML: &str = include_str!("../../templates/outcome.html");
const ANSWER_TXT: &str = include_str!("../../templates/answer.txt");

fn template_error(e: minijinja::Error) -> QiyasError {
    QiyasError::Template(e.to_string())
}

/// Compiled templates. `.html` templates auto-escape, `.txt` does not.
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        for (name, source) in [
            ("base.html", BASE_HTML),
            ("index.html", INDEX_HTML),
            ("outcome.html", OUTCOME_HTML),
            ("answer.txt", ANSWER_TXT),
        ] {
            env.add_template(name, source).map_err(template_error)?;
        }
        Ok(Self { env })
    }

    fn render(&self, name: &str, cycle: &AskCycle) -> Result<String> {
        self.env
            .get_template(name)
            .and_then(|t| {
                // Number's own Display keeps integers as integers.
                let confidence = cycle.answer.as_ref().map(|a| a.confidence.to_string());
                t.render(context! { state => cycle, confidence => confidence })
            })
            .map_err(template_error)
    }

    /// The whole page: purpose, disclaimer, form, then error/results.
    pub fn render_page(&self, cycle: &AskCycle) -> Result<String> {
        self.render("index.html", cycle)
    }

    /// Only the error panel and results panel, for in-place updates.
    pub fn render_outcome(&self, cycle: &AskCycle) -> Result<String> {
        self.render("outcome.html", cycle)
    }

    /// Plain-text rendering for the terminal.
    pub fn render_text(&self, cycle: &AskCycle) -> Result<String> {
        self.render("answer.txt", cycle)
    }
}
