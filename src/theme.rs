pub use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::ThemeName;
use crate::solution::Category;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColorScheme {
    pub foreground: Option<ColorWrapper>,
    pub background: Option<ColorWrapper>,
    pub bold: bool,
    pub underline: bool,
}

// Wrapper type for Color that implements Serialize/Deserialize
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub struct ColorWrapper(Color);

impl From<ColorWrapper> for String {
    fn from(wrapper: ColorWrapper) -> Self {
        format!("{:?}", wrapper.0)
    }
}

impl From<String> for ColorWrapper {
    fn from(s: String) -> Self {
        ColorWrapper(Color::from_str(&s).unwrap_or(Color::White))
    }
}

impl From<Color> for ColorWrapper {
    fn from(color: Color) -> Self {
        ColorWrapper(color)
    }
}

impl ColorScheme {
    fn fg(color: Color) -> Self {
        Self {
            foreground: Some(ColorWrapper(color)),
            ..Default::default()
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn apply(&self, text: &str) -> colored::ColoredString {
        let mut colored_text: colored::ColoredString = text.into();

        if let Some(fg) = &self.foreground {
            colored_text = colored_text.color(fg.0);
        }
        if let Some(bg) = &self.background {
            colored_text = colored_text.on_color(bg.0);
        }
        if self.bold {
            colored_text = colored_text.bold();
        }
        if self.underline {
            colored_text = colored_text.underline();
        }

        colored_text
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub title: ColorScheme,
    pub description: ColorScheme,
    pub heading: ColorScheme,
    pub step: ColorScheme,
    pub code: ColorScheme,
    pub tip: ColorScheme,
    pub resource: ColorScheme,
    /// Category badges, keyed by the category vocabulary.
    pub categories: CategoryColors,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryColors {
    pub syntax: ColorScheme,
    pub runtime: ColorScheme,
    pub logic: ColorScheme,
    pub network: ColorScheme,
    pub dependency: ColorScheme,
    pub configuration: ColorScheme,
    pub default: ColorScheme,
    pub external: ColorScheme,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: ColorScheme::fg(Color::Blue).bold(),
            description: ColorScheme::fg(Color::Yellow),
            heading: ColorScheme::fg(Color::Blue).bold(),
            step: ColorScheme::fg(Color::Green),
            code: ColorScheme::fg(Color::Cyan),
            tip: ColorScheme::fg(Color::Magenta),
            resource: ColorScheme {
                foreground: Some(ColorWrapper(Color::Blue)),
                background: None,
                bold: false,
                underline: true,
            },
            categories: CategoryColors {
                syntax: ColorScheme::fg(Color::Red).bold(),
                runtime: ColorScheme::fg(Color::Yellow).bold(),
                logic: ColorScheme::fg(Color::Magenta).bold(),
                network: ColorScheme::fg(Color::Cyan).bold(),
                dependency: ColorScheme::fg(Color::Green).bold(),
                configuration: ColorScheme::fg(Color::Blue).bold(),
                default: ColorScheme::fg(Color::White).bold(),
                external: ColorScheme::fg(Color::BrightYellow).bold(),
            },
        }
    }
}

impl Theme {
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Dark => Self::dark(),
            ThemeName::Light => Self::light(),
            ThemeName::Monochrome => Self::monochrome(),
        }
    }

    pub fn dark() -> Self {
        Self::default()
    }

    pub fn light() -> Self {
        Self {
            title: ColorScheme::fg(Color::BrightBlue).bold(),
            description: ColorScheme::fg(Color::Black),
            heading: ColorScheme::fg(Color::BrightBlue).bold(),
            step: ColorScheme::fg(Color::BrightGreen),
            code: ColorScheme::fg(Color::BrightCyan),
            tip: ColorScheme::fg(Color::BrightMagenta),
            resource: ColorScheme::fg(Color::BrightBlue),
            categories: CategoryColors {
                syntax: ColorScheme::fg(Color::BrightRed),
                runtime: ColorScheme::fg(Color::BrightYellow),
                logic: ColorScheme::fg(Color::BrightMagenta),
                network: ColorScheme::fg(Color::BrightCyan),
                dependency: ColorScheme::fg(Color::BrightGreen),
                configuration: ColorScheme::fg(Color::BrightBlue),
                default: ColorScheme::fg(Color::Black),
                external: ColorScheme::fg(Color::Yellow),
            },
        }
    }

    pub fn monochrome() -> Self {
        let plain = ColorScheme::default();
        let strong = ColorScheme {
            bold: true,
            ..Default::default()
        };

        Self {
            title: ColorScheme {
                foreground: None,
                background: None,
                bold: true,
                underline: true,
            },
            description: plain.clone(),
            heading: strong.clone(),
            step: plain.clone(),
            code: plain.clone(),
            tip: plain.clone(),
            resource: ColorScheme {
                underline: true,
                ..Default::default()
            },
            categories: CategoryColors {
                syntax: strong.clone(),
                runtime: strong.clone(),
                logic: strong.clone(),
                network: strong.clone(),
                dependency: strong.clone(),
                configuration: strong.clone(),
                default: strong.clone(),
                external: strong,
            },
        }
    }

    pub fn category(&self, category: Category) -> &ColorScheme {
        let colors = &self.categories;
        match category {
            Category::Syntax => &colors.syntax,
            Category::Runtime => &colors.runtime,
            Category::Logic => &colors.logic,
            Category::Network => &colors.network,
            Category::Dependency => &colors.dependency,
            Category::Configuration => &colors.configuration,
            Category::Default => &colors.default,
            Category::External => &colors.external,
        }
    }
}
