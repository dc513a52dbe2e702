use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn render_text_from_model<T: Serialize + ?Sized>(model: &T) -> String {
    let value = serde_json::to_value(model).unwrap_or(Value::Null);
    render_value(&value, 0)
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn render_value(value: &Value, indent: usize) -> String {
    let pad = " ".repeat(indent);
    match value {
        Value::Array(items) => {
            let mut out = String::new();
            for (i, item) in items.iter().enumerate() {
                match item {
                    Value::Object(_) => {
                        // Records are separated by a blank line.
                        if i > 0 {
                            out.push('\n');
                        }
                        out.push_str(&render_value(item, indent));
                    }
                    Value::Array(_) => {
                        out.push_str(&format!("{pad}-\n"));
                        out.push_str(&render_value(item, indent + 2));
                    }
                    _ => out.push_str(&format!("{pad}- {}\n", render_scalar(item))),
                }
            }
            out
        }
        Value::Object(map) => {
            let mut out = String::new();
            for (key, v) in map {
                match v {
                    Value::Array(_) | Value::Object(_) => {
                        out.push_str(&format!("{pad}{key}:\n"));
                        out.push_str(&render_value(v, indent + 2));
                    }
                    _ => out.push_str(&format!("{pad}{key}: {}\n", render_scalar(v))),
                }
            }
            out
        }
        Value::Null => String::new(),
        scalar => format!("{pad}{}\n", render_scalar(scalar)),
    }
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn is_json(&self) -> bool {
        self.engine == OutputFormat::Json
    }

    pub fn format<T: Serialize + ?Sized>(&self, model: &T) -> String {
        match self.engine {
            OutputFormat::Text => render_text_from_model(model),
            OutputFormat::Json => {
                let mut json = serde_json::to_string_pretty(model).unwrap_or_default();
                json.push('\n');
                json
            }
        }
    }

    pub fn format_list<T: Serialize>(&self, list: &[T], title: &str, empty_msg: &str) -> String {
        match self.engine {
            OutputFormat::Text if list.is_empty() => format!("{empty_msg}\n"),
            OutputFormat::Text if !title.is_empty() => {
                format!("{title}\n{}", render_text_from_model(list))
            }
            _ => self.format(list),
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
