//! Compiled HTML templates for every page

use super::{Page, SiteVariant};
use askama::Template;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// Values shared by every page: header, prompt and navigation.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub site_title: String,
    pub owner: String,
    pub variant: SiteVariant,
    pub nav: Vec<NavLink>,
    pub submit_path: &'static str,
    pub version: String,
}

#[derive(Template)]
#[template(path = "shell/index.html")]
pub struct ShellIndexTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "shell/whoami.html")]
pub struct WhoamiTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "shell/ls.html")]
pub struct LsTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "shell/man.html")]
pub struct ManTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "terminal/welcome.html")]
pub struct WelcomeTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "terminal/home.html")]
pub struct TerminalHomeTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "terminal/about.html")]
pub struct AboutTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "terminal/projects.html")]
pub struct ProjectsTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "terminal/contact.html")]
pub struct ContactTemplate {
    pub ctx: PageContext,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
    pub path: String,
}

pub fn render_page(page: Page, ctx: PageContext) -> askama::Result<String> {
    match page {
        Page::ShellIndex => ShellIndexTemplate { ctx }.render(),
        Page::Whoami => WhoamiTemplate { ctx }.render(),
        Page::Ls => LsTemplate { ctx }.render(),
        Page::Man => ManTemplate { ctx }.render(),
        Page::Welcome => WelcomeTemplate { ctx }.render(),
        Page::TerminalHome => TerminalHomeTemplate { ctx }.render(),
        Page::About => AboutTemplate { ctx }.render(),
        Page::Projects => ProjectsTemplate { ctx }.render(),
        Page::Contact => ContactTemplate { ctx }.render(),
    }
}

pub fn render_not_found(ctx: PageContext, path: impl Into<String>) -> askama::Result<String> {
    NotFoundTemplate {
        ctx,
        path: path.into(),
    }
    .render()
}
