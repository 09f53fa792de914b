//! Portfolio body laid out as terminal lines
//!
//! The body sits below the hero. Line indices here are relative to the start
//! of the body; the app adds the hero height to get page rows.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use termfolio_core::content::{Portfolio, SectionKind};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

const MARGIN: usize = 2;
const MIN_CONTENT_WIDTH: usize = 20;

/// A focusable link on its own body line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub line: usize,
    pub label: String,
    pub url: String,
}

/// Section header line, re-rendered while its title scrambles in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeader {
    pub line: usize,
    pub section: SectionKind,
}

#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub lines: Vec<Line<'static>>,
    /// Body line where each navigation entry starts, in navigation order.
    /// `None` for the home entry, which is the hero itself.
    pub section_starts: Vec<Option<usize>>,
    pub headers: Vec<SectionHeader>,
    pub links: Vec<PageLink>,
    pub width: u16,
}

impl PageLayout {
    pub fn build(portfolio: &Portfolio, theme: &Theme, width: u16) -> Self {
        let mut builder = Builder::new(theme, width);

        let mut section_starts = Vec::with_capacity(portfolio.navigation.len());
        for item in &portfolio.navigation {
            if item.section == SectionKind::Home {
                section_starts.push(None);
                continue;
            }
            section_starts.push(Some(builder.lines.len()));
            builder.header(item.section, portfolio.quotes.for_section(item.section));
            match item.section {
                SectionKind::Home => {}
                SectionKind::About => builder.about(portfolio),
                SectionKind::Experience => builder.experience(portfolio),
                SectionKind::Projects => builder.projects(portfolio),
                SectionKind::Contact => builder.contact(portfolio),
            }
        }
        builder.footer(&portfolio.hero.name);

        Self {
            lines: builder.lines,
            section_starts,
            headers: builder.headers,
            links: builder.links,
            width,
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text shown for a section header when no scramble is running
    pub fn header_text(portfolio: &Portfolio, section: SectionKind) -> String {
        portfolio.label_for(section).to_uppercase()
    }

    /// Styled header line with the given title text
    pub fn header_line(text: &str, theme: &Theme) -> Line<'static> {
        Line::from(vec![
            Span::raw(" ".repeat(MARGIN)),
            Span::styled("── ", Style::default().fg(theme.border)),
            Span::styled(
                text.to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ──", Style::default().fg(theme.border)),
        ])
    }
}

struct Builder<'t> {
    theme: &'t Theme,
    content_width: usize,
    lines: Vec<Line<'static>>,
    headers: Vec<SectionHeader>,
    links: Vec<PageLink>,
}

impl<'t> Builder<'t> {
    fn new(theme: &'t Theme, width: u16) -> Self {
        Self {
            theme,
            content_width: (width as usize)
                .saturating_sub(MARGIN * 2)
                .max(MIN_CONTENT_WIDTH),
            lines: Vec::new(),
            headers: Vec::new(),
            links: Vec::new(),
        }
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut all = Vec::with_capacity(spans.len() + 1);
        all.push(Span::raw(" ".repeat(MARGIN)));
        all.extend(spans);
        self.lines.push(Line::from(all));
    }

    /// Word-wrapped paragraph. `indent` applies to every line, `bullet` only
    /// to the first.
    fn paragraph(&mut self, text: &str, style: Style, indent: usize, bullet: Option<&str>) {
        let bullet_width = bullet.map(|b| b.width()).unwrap_or(0);
        let width = self
            .content_width
            .saturating_sub(indent + bullet_width)
            .max(1);
        for (i, row) in wrap_words(text, width).into_iter().enumerate() {
            let lead = match (i, bullet) {
                (0, Some(b)) => format!("{}{}", " ".repeat(indent), b),
                _ => " ".repeat(indent + bullet_width),
            };
            self.push(vec![
                Span::styled(lead, Style::default().fg(self.theme.accent)),
                Span::styled(row, style),
            ]);
        }
    }

    fn link(&mut self, icon: &str, label: &str, url: &str) {
        self.links.push(PageLink {
            line: self.lines.len(),
            label: label.to_string(),
            url: url.to_string(),
        });
        let shown = truncate(url, self.content_width.saturating_sub(label.width() + 6));
        self.push(vec![
            Span::styled(format!("  {} ", icon), Style::default().fg(self.theme.accent)),
            Span::styled(
                label.to_string(),
                Style::default()
                    .fg(self.theme.link)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::styled(format!("  {}", shown), Style::default().fg(self.theme.muted)),
        ]);
    }

    fn text(&self) -> Style {
        Style::default().fg(self.theme.text)
    }

    fn muted(&self) -> Style {
        Style::default().fg(self.theme.muted)
    }

    fn strong(&self) -> Style {
        Style::default()
            .fg(self.theme.text)
            .add_modifier(Modifier::BOLD)
    }

    fn header(&mut self, section: SectionKind, quote: Option<&str>) {
        self.blank();
        self.headers.push(SectionHeader {
            line: self.lines.len(),
            section,
        });
        // Placeholder; the renderer draws the (possibly scrambling) title here
        self.lines.push(Line::default());
        if let Some(quote) = quote {
            let style = self.muted().add_modifier(Modifier::ITALIC);
            self.paragraph(&format!("\"{}\"", quote), style, 3, None);
        }
        self.blank();
    }

    fn about(&mut self, portfolio: &Portfolio) {
        let about = &portfolio.about;
        if !about.greeting.is_empty() {
            let style = Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD);
            self.paragraph(&about.greeting, style, 0, None);
            self.blank();
        }
        for para in &about.story {
            self.paragraph(para, self.text(), 0, None);
            self.blank();
        }

        for stat in &about.stats {
            let value = Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD);
            self.push(vec![
                Span::styled(stat.value.clone(), value),
                Span::styled(format!("  {}", stat.label), self.muted()),
            ]);
        }
        if !about.stats.is_empty() {
            self.blank();
        }

        for skill in &about.skills {
            self.paragraph(&skill.category, self.strong(), 0, None);
            self.paragraph(&skill.items.join(" · "), self.text(), 2, None);
        }
        if !about.skills.is_empty() {
            self.blank();
        }

        for interest in &about.interests {
            let text = if interest.description.is_empty() {
                interest.title.clone()
            } else {
                format!("{}: {}", interest.title, interest.description)
            };
            self.paragraph(&text, self.text(), 0, Some("• "));
        }
        if let Some(quote) = &about.quote {
            self.blank();
            let style = self.muted().add_modifier(Modifier::ITALIC);
            self.paragraph(&format!("\"{}\"", quote), style, 2, None);
        }
    }

    fn experience(&mut self, portfolio: &Portfolio) {
        for (i, entry) in portfolio.experience.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            let year = format!("{}  ", entry.year);
            self.paragraph(&entry.title, self.strong(), 0, Some(year.as_str()));
            let company = Style::default().fg(self.theme.link);
            self.paragraph(&format!("@ {}", entry.company), company, 6, None);

            let meta: Vec<&str> = [
                entry.kind.as_str(),
                entry.duration.as_str(),
                entry.location.as_str(),
            ]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
            if !meta.is_empty() {
                self.paragraph(&meta.join(" · "), self.muted(), 6, None);
            }
            for highlight in &entry.highlights {
                self.paragraph(highlight, self.text(), 6, Some("▸ "));
            }
            if !entry.skills.is_empty() {
                self.paragraph(&entry.skills.join(" · "), self.muted(), 6, None);
            }
        }
    }

    fn projects(&mut self, portfolio: &Portfolio) {
        let projects = &portfolio.projects;
        if !projects.intro.is_empty() {
            self.paragraph(&projects.intro, self.muted(), 0, None);
            self.blank();
        }
        for (i, project) in projects.items.iter().enumerate() {
            if i > 0 {
                self.blank();
            }
            let style = Style::default()
                .fg(self.theme.accent)
                .add_modifier(Modifier::BOLD);
            self.paragraph(&project.title, style, 0, Some("◆ "));
            if !project.description.is_empty() {
                self.paragraph(&project.description, self.text(), 2, None);
            }
            if !project.technologies.is_empty() {
                let tags: Vec<String> = project
                    .technologies
                    .iter()
                    .map(|t| format!("[{}]", t))
                    .collect();
                self.paragraph(&tags.join(" "), self.muted(), 2, None);
            }
            for (label, url) in project.links.iter() {
                self.link("↗", label, url);
            }
        }
    }

    fn contact(&mut self, portfolio: &Portfolio) {
        let contact = &portfolio.contact;
        if !contact.title.is_empty() {
            self.paragraph(&contact.title, self.strong(), 0, None);
        }
        for line in &contact.subtitle {
            self.paragraph(line, self.muted(), 0, None);
        }
        self.blank();
        if let Some(email) = &contact.email {
            self.link("✉", email, &format!("mailto:{}", email));
        }
        if let Some(resume) = &contact.resume_url {
            self.link("⎙", "Resume", resume);
        }
        for social in &contact.social {
            self.link("→", &social.name, &social.url);
        }
    }

    fn footer(&mut self, name: &str) {
        self.blank();
        self.blank();
        self.paragraph(&format!("© {}", name), self.muted(), 0, None);
        self.blank();
    }
}

/// Wrap on whitespace, splitting words wider than `max_width`. Widths are in
/// terminal columns.
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut result = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            result.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(1);
            if current_width + ch_width > max_width && current_width > 0 {
                result.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if !current.is_empty() || result.is_empty() {
        result.push(current);
    }
    result
}

fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(1);
        if width + w + 3 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}
