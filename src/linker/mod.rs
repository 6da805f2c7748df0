//! Internal-link rewriting for blog articles.
//!
//! Given a set of keyword rules, [`rewrite_links`] turns the first
//! occurrence of each keyword in an article into a link to the matching
//! internal page. Existing links, headings, scripts, styles and code blocks
//! are left alone.

pub mod html;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub use crate::error::LinkError;
use html::Segment;

/// Elements whose content is never rewritten.
const SKIPPED_ELEMENTS: &[&str] = &[
    "a", "script", "style", "code", "pre", "h1", "h2", "h3", "h4", "h5", "h6",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRule {
    pub keyword: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkOptions {
    /// Maximum links inserted in one document, 0 for no limit.
    pub max_links: usize,
    /// Path of the page being rewritten; rules pointing to it are skipped.
    pub current_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertedLink {
    pub keyword: String,
    pub url: String,
    /// Text as it appeared in the document.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub html: String,
    /// Links in document order.
    pub inserted: Vec<InsertedLink>,
}

/// Links the first occurrence of each rule keyword in `html`.
///
/// Matching is case-insensitive on whole words and longer keywords win over
/// shorter ones starting at the same place. Each keyword and each URL is
/// linked at most once.
pub fn rewrite_links(
    html: &str,
    rules: &[LinkRule],
    options: &LinkOptions,
) -> Result<Rewrite, LinkError> {
    let rules = active_rules(rules, options);
    if rules.is_empty() {
        return Ok(Rewrite {
            html: html.to_string(),
            inserted: Vec::new(),
        });
    }

    // One capture group per rule, in rule order
    let alternatives: Vec<String> = rules
        .iter()
        .map(|r| format!("({})", regex::escape(&r.keyword)))
        .collect();
    let matcher = Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|")))?;

    let mut linked = vec![false; rules.len()];
    let mut used_urls: HashSet<&str> = HashSet::new();
    let mut inserted: Vec<InsertedLink> = Vec::new();
    let mut skip_depth = 0usize;
    let mut out = String::with_capacity(html.len() + 64);

    for segment in html::segments(html) {
        let text = match segment {
            Segment::Tag(tag) => {
                if let Some(info) = html::parse_tag(tag) {
                    if SKIPPED_ELEMENTS.contains(&info.name.as_str()) {
                        if info.closing {
                            skip_depth = skip_depth.saturating_sub(1);
                        } else if !info.self_closing {
                            skip_depth += 1;
                        }
                    }
                }
                out.push_str(tag);
                continue;
            }
            Segment::Text(text) => text,
        };

        let exhausted = options.max_links > 0 && inserted.len() >= options.max_links;
        if skip_depth > 0 || exhausted {
            out.push_str(text);
            continue;
        }

        let replaced = matcher.replace_all(text, |caps: &Captures<'_>| {
            let matched = &caps[0];
            let Some(index) = (1..caps.len()).find(|&group| caps.get(group).is_some()) else {
                return matched.to_string();
            };
            let index = index - 1;
            let rule = rules[index];
            let limit_reached = options.max_links > 0 && inserted.len() >= options.max_links;
            if linked[index] || used_urls.contains(rule.url.as_str()) || limit_reached {
                return matched.to_string();
            }

            linked[index] = true;
            used_urls.insert(rule.url.as_str());
            inserted.push(InsertedLink {
                keyword: rule.keyword.clone(),
                url: rule.url.clone(),
                text: matched.to_string(),
            });
            format!("<a href=\"{}\">{matched}</a>", escape_attribute(&rule.url))
        });
        out.push_str(&replaced);
    }

    tracing::debug!(links = inserted.len(), "rewrote internal links");
    Ok(Rewrite {
        html: out,
        inserted,
    })
}

/// Usable rules, longest keyword first, one per keyword.
fn active_rules<'a>(rules: &'a [LinkRule], options: &LinkOptions) -> Vec<&'a LinkRule> {
    let mut seen = HashSet::new();
    let mut active: Vec<&LinkRule> = rules
        .iter()
        .filter(|r| !r.keyword.trim().is_empty() && !r.url.is_empty())
        .filter(|r| options.current_path.as_deref() != Some(r.url.as_str()))
        .filter(|r| seen.insert(r.keyword.to_lowercase()))
        .collect();
    active.sort_by_key(|r| std::cmp::Reverse(r.keyword.chars().count()));
    active
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
