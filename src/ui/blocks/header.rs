use crossterm::style::Stylize;

use crate::ui::primitives::icon::Icon;
use crate::ui::theme;

#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    items: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            items: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.items.push((label.into(), value.into()));
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();
        let title = if supports_color {
            format!("{}", self.title.as_str().with(theme::colors::INFO).bold())
        } else {
            self.title.clone()
        };
        out.push_str(&format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            title
        ));
        for (label, value) in &self.items {
            out.push_str(&format!("{}: {}\n", label, value));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ascii_icon_when_unicode_unsupported() {
        let mut header = CommandHeader::new(Icon::Build, "Stitch Build");
        header.add("Entry", "src/index.html");

        let rendered = header.render(false, false);
        insta::assert_snapshot!(rendered.trim_end(), @r"
        [BUILD] Stitch Build
        Entry: src/index.html
        ");
    }
}
