//! Token substitution for blueprint paths and file contents

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Values substituted into blueprint files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locals {
    pub name: String,
    pub dasherized_name: String,
    pub classified_name: String,
    pub source_dir: String,
    pub prefix: String,
    pub style_ext: String,
    pub mobile: bool,
}

impl Locals {
    pub fn new(name: &str, source_dir: &str, prefix: &str, style: &str, mobile: bool) -> Self {
        Self {
            name: name.to_string(),
            dasherized_name: dasherize(name),
            classified_name: classify(name),
            source_dir: source_dir.to_string(),
            prefix: prefix.to_string(),
            style_ext: style.to_string(),
            mobile,
        }
    }

    fn lookup(&self, key: &str) -> Option<String> {
        let value = match key {
            "name" => self.name.clone(),
            "dasherizedPackageName" => self.dasherized_name.clone(),
            "classifiedPackageName" => self.classified_name.clone(),
            "sourceDir" => self.source_dir.clone(),
            "prefix" => self.prefix.clone(),
            "styleExt" => self.style_ext.clone(),
            "mobile" => self.mobile.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Replace `__name__`, `__src__` and `__styleext__` in a relative path
    pub fn render_path(&self, path: &str) -> String {
        path.replace("__name__", &self.dasherized_name)
            .replace("__src__", &self.source_dir)
            .replace("__styleext__", &self.style_ext)
    }

    /// Replace `<%= key %>` tokens; unknown keys are left untouched
    pub fn render_content(&self, content: &str) -> String {
        token_pattern()
            .replace_all(content, |caps: &Captures<'_>| {
                self.lookup(&caps[1])
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<%=\s*([A-Za-z]+)\s*%>").expect("valid regex"))
}

/// `MyApp_name` -> `my-app-name`
pub fn dasherize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower_or_digit = false;

    for ch in name.chars() {
        if ch == '_' || ch == ' ' || ch == '-' {
            if !out.ends_with('-') && !out.is_empty() {
                out.push('-');
            }
            prev_lower_or_digit = false;
        } else if ch.is_ascii_uppercase() {
            if prev_lower_or_digit {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else {
            out.push(ch);
            prev_lower_or_digit = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }

    out
}

/// `my-app_name` -> `MyAppName`
pub fn classify(name: &str) -> String {
    dasherize(name)
        .split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
