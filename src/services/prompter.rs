use std::io::{self, BufRead, Write};
use tracing::debug;
use crate::utils::error::PromptError;

pub type PromptResult<T> = std::result::Result<T, PromptError>;

/// Line-oriented question/answer session over explicit I/O handles
#[derive(Debug)]
pub struct Prompter<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

impl Prompter<io::StdinLock<'static>, io::Stdout, io::Stderr> {
    /// Prompter bound to the process terminal
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Prompter<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self { input, output, errors }
    }

    /// Give the handles back, ending the session
    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.output, self.errors)
    }

    /// Ask a free-form question.
    ///
    /// Returns the trimmed answer, or `default` when the answer is blank,
    /// or an empty string when there is neither.
    pub fn ask_string(&mut self, question: &str, default: Option<&str>) -> PromptResult<String> {
        let default = default.filter(|d| !d.is_empty());

        match default {
            Some(default) => write!(self.output, "{question} ({default}): ")?,
            None => write!(self.output, "{question}: ")?,
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }

        let answer = line.trim();
        debug!(question, answer, "prompt answered");

        if answer.is_empty() {
            Ok(default.unwrap_or_default().to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    /// Ask until the answer is the default or one of `options`.
    ///
    /// Options match case-insensitively and the option's own casing is
    /// returned. The default is only accepted verbatim.
    pub fn ask_enum<S: AsRef<str>>(
        &mut self,
        question: &str,
        options: &[S],
        default: Option<&str>,
    ) -> PromptResult<String> {
        if options.is_empty() {
            return Err(PromptError::NoOptions);
        }

        let listed = list_options(options);
        let formatted = format!("{question} {listed}");

        loop {
            let answer = self.ask_string(&formatted, default)?;

            if default == Some(answer.as_str()) {
                return Ok(answer);
            }

            if let Some(option) = options
                .iter()
                .map(AsRef::as_ref)
                .find(|option| option.to_lowercase() == answer.to_lowercase())
            {
                return Ok(option.to_string());
            }

            writeln!(
                self.errors,
                "Expected one of {listed} but received {}",
                serde_json::Value::from(answer)
            )?;
        }
    }
}

/// Options as a compact JSON array, e.g. `["a","B","c"]`
fn list_options<S: AsRef<str>>(options: &[S]) -> String {
    let values: Vec<&str> = options.iter().map(AsRef::as_ref).collect();
    serde_json::to_string(&values).unwrap_or_default()
}
