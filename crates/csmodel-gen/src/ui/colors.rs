use std::io::IsTerminal;

use clap::{
  ValueEnum,
  builder::styling::{Color as ClapColor, RgbColor, Style, Styles},
};
use comfy_table::Color as CellColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

type Rgb = (u8, u8, u8);

/// One (dark, light) pair per role.
struct Role {
  dark: Rgb,
  light: Rgb,
}

const TIMESTAMP: Role = Role {
  dark: (118, 166, 166),
  light: (92, 62, 38),
};
const PRIMARY: Role = Role {
  dark: (191, 126, 4),
  light: (70, 42, 25),
};
const ACCENT: Role = Role {
  dark: (166, 84, 55),
  light: (211, 99, 70),
};
const SUCCESS: Role = Role {
  dark: (118, 166, 166),
  light: (34, 142, 90),
};
const LABEL: Role = Role {
  dark: (217, 164, 4),
  light: (176, 103, 66),
};
const VALUE: Role = Role {
  dark: (242, 211, 56),
  light: (199, 146, 76),
};
const MUTED: Role = Role {
  dark: (140, 140, 140),
  light: (110, 110, 110),
};

#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn rgb(&self, role: &Role) -> Option<Rgb> {
    if !self.enabled {
      return None;
    }
    Some(match self.theme {
      Theme::Dark => role.dark,
      Theme::Light => role.light,
    })
  }

  const fn pick(&self, role: &Role) -> Color {
    match self.rgb(role) {
      Some((r, g, b)) => Color::Rgb { r, g, b },
      None => Color::Reset,
    }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(&TIMESTAMP)
  }

  pub const fn primary(&self) -> Color {
    self.pick(&PRIMARY)
  }

  pub const fn accent(&self) -> Color {
    self.pick(&ACCENT)
  }

  pub const fn success(&self) -> Color {
    self.pick(&SUCCESS)
  }

  pub const fn label(&self) -> Color {
    self.pick(&LABEL)
  }

  pub const fn value(&self) -> Color {
    self.pick(&VALUE)
  }

  pub const fn muted(&self) -> Color {
    self.pick(&MUTED)
  }

  /// Same palette for table cells.
  pub fn cell(color: Color) -> CellColor {
    match color {
      Color::Rgb { r, g, b } => CellColor::Rgb { r, g, b },
      _ => CellColor::Reset,
    }
  }

  const fn clap_color(role: &Role) -> Option<ClapColor> {
    let (r, g, b) = role.dark;
    Some(ClapColor::Rgb(RgbColor(r, g, b)))
  }

  /// Help output always uses the dark palette.
  pub const fn clap_styles() -> Styles {
    Styles::styled()
      .header(Style::new().bold().underline().fg_color(Self::clap_color(&LABEL)))
      .usage(Style::new().bold().fg_color(Self::clap_color(&LABEL)))
      .literal(Style::new().fg_color(Self::clap_color(&SUCCESS)))
      .placeholder(Style::new().fg_color(Self::clap_color(&TIMESTAMP)))
      .error(Style::new().bold().fg_color(Self::clap_color(&ACCENT)))
      .valid(Style::new().fg_color(Self::clap_color(&SUCCESS)))
      .invalid(Style::new().bold().fg_color(Self::clap_color(&ACCENT)))
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => theme_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref()).unwrap_or(Theme::Dark),
  }
}

/// `COLORFGBG` is `fg;bg` (sometimes `fg;default;bg`); background codes 8
/// and above are the bright half of the palette.
fn theme_from_colorfgbg(value: Option<&str>) -> Option<Theme> {
  let background = value?.split(';').next_back()?.parse::<u8>().ok()?;
  Some(if background >= 8 { Theme::Light } else { Theme::Dark })
}
