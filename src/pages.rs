//! Text pages: navigation bar, resume viewer, project gallery and contact.

use crate::canvas::{wrap, Canvas, Rect, Style};
use crate::content::{Route, EXPERIENCES, PROJECTS, SKILLS, SOCIAL_LINKS};
use crate::graphics::Rgb;
use crate::pagination::Pagination;

const PAPER: Rgb = [248, 250, 252];
const INK: Rgb = [30, 41, 59];
const MUTED: Rgb = [100, 116, 139];
const ACCENT: Rgb = [37, 99, 235];
const DISABLED: Rgb = [203, 213, 225];
const NAV_BG: Rgb = [15, 23, 42];
const NAV_INK: Rgb = [226, 232, 240];

/// Rows used by the navigation bar at the top of every page
pub const NAV_ROWS: usize = 1;
const MARGIN: usize = 2;

/// Clickable regions of the navigation bar
pub fn draw_nav(canvas: &mut Canvas, current: Route) -> Vec<(Rect, Route)> {
    canvas.fill(
        Rect {
            col: 0,
            row: 0,
            width: canvas.cols,
            height: NAV_ROWS,
        },
        NAV_BG,
    );
    let mut col = canvas.put_str(1, 0, "islandfolio ", Style::fg(NAV_INK).on(NAV_BG).bold());
    let mut tabs = Vec::new();
    for (i, route) in Route::ALL.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, route.title());
        let style = if *route == current {
            Style::fg(NAV_BG).on(NAV_INK).bold()
        } else {
            Style::fg(NAV_INK).on(NAV_BG)
        };
        let end = canvas.put_str(col, 0, &label, style);
        tabs.push((
            Rect {
                col,
                row: 0,
                width: end - col,
                height: 1,
            },
            *route,
        ));
        col = end;
    }
    tabs
}

/// Writes styled lines below the navigation bar, skipping `scroll` lines
fn draw_lines(canvas: &mut Canvas, lines: &[(String, Style)], scroll: usize, bottom: usize) {
    let top = NAV_ROWS + 1;
    for (row, (text, style)) in (top..bottom).zip(lines.iter().skip(scroll)) {
        let _ = canvas.put_str(MARGIN, row, text, *style);
    }
}

fn push_wrapped(lines: &mut Vec<(String, Style)>, text: &str, width: usize, style: Style) {
    lines.extend(wrap(text, width).into_iter().map(|line| (line, style)));
}

fn page_width(canvas: &Canvas) -> usize {
    canvas.cols.saturating_sub(MARGIN * 2).max(10)
}

/// Previous/next controls of the resume viewer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResumeButtons {
    pub previous: Rect,
    pub next: Rect,
}

fn resume_lines(page: usize, width: usize) -> Vec<(String, Style)> {
    let body = Style::fg(INK).on(PAPER);
    let muted = Style::fg(MUTED).on(PAPER);
    let heading = Style::fg(ACCENT).on(PAPER).bold();
    let mut lines = Vec::new();

    if page == 1 {
        lines.push(("Work Experience".to_string(), heading));
        lines.push((String::new(), body));
        for experience in EXPERIENCES {
            lines.push((experience.title.to_string(), body.bold()));
            let company = if experience.client.is_empty() {
                experience.company.to_string()
            } else {
                format!("{} / client: {}", experience.company, experience.client)
            };
            push_wrapped(&mut lines, &company, width, muted);
            lines.push((
                format!("{}, team of {}", experience.date, experience.team_size),
                muted,
            ));
            for highlight in experience.highlights {
                let wrapped = wrap(highlight, width.saturating_sub(2));
                for (i, line) in wrapped.into_iter().enumerate() {
                    let bullet = if i == 0 { "\u{2022} " } else { "  " };
                    lines.push((format!("{bullet}{line}"), body));
                }
            }
            lines.push((String::new(), body));
        }
    } else {
        lines.push(("Skills".to_string(), heading));
        lines.push((String::new(), body));
        let mut kinds: Vec<&str> = Vec::new();
        for skill in SKILLS {
            if !kinds.contains(&skill.kind) {
                kinds.push(skill.kind);
            }
        }
        for kind in kinds {
            let names: Vec<&str> = SKILLS
                .iter()
                .filter(|skill| skill.kind == kind)
                .map(|skill| skill.name)
                .collect();
            lines.push((kind.to_string(), body.bold()));
            push_wrapped(&mut lines, &names.join(", "), width, body);
        }
        lines.push((String::new(), body));
        lines.push(("Links".to_string(), heading));
        lines.push((String::new(), body));
        for social in SOCIAL_LINKS {
            lines.push((format!("{:<10}{}", social.name, social.link), body));
        }
    }
    lines
}

/// Draws the resume viewer and its pagination controls
pub fn draw_about(canvas: &mut Canvas, resume: &Pagination) -> ResumeButtons {
    canvas.clear(PAPER);
    let controls_row = canvas.rows.saturating_sub(2);
    let lines = resume_lines(resume.page(), page_width(canvas));
    draw_lines(canvas, &lines, 0, controls_row.saturating_sub(1));

    let enabled = Style::fg(PAPER).on(ACCENT).bold();
    let disabled = Style::fg(MUTED).on(DISABLED);
    let previous_label = "[ \u{2190} Previous ]";
    let next_label = "[ Next \u{2192} ]";

    let previous_end = canvas.put_str(
        MARGIN,
        controls_row,
        previous_label,
        if resume.can_previous() { enabled } else { disabled },
    );
    let indicator = format!("  Page {} of {}  ", resume.page(), resume.page_count());
    let indicator_end = canvas.put_str(previous_end, controls_row, &indicator, Style::fg(INK).on(PAPER));
    let next_end = canvas.put_str(
        indicator_end,
        controls_row,
        next_label,
        if resume.can_next() { enabled } else { disabled },
    );

    ResumeButtons {
        previous: Rect {
            col: MARGIN,
            row: controls_row,
            width: previous_end - MARGIN,
            height: 1,
        },
        next: Rect {
            col: indicator_end,
            row: controls_row,
            width: next_end - indicator_end,
            height: 1,
        },
    }
}

fn portfolio_lines(width: usize) -> Vec<(String, Style)> {
    let body = Style::fg(INK).on(PAPER);
    let muted = Style::fg(MUTED).on(PAPER);
    let mut lines = vec![("My Portfolio".to_string(), Style::fg(ACCENT).on(PAPER).bold())];
    lines.push((String::new(), body));
    push_wrapped(
        &mut lines,
        "Below are some of the projects/apps that I have worked on throughout my education and personal development.",
        width,
        muted,
    );
    lines.push((String::new(), body));
    for project in PROJECTS {
        lines.push((
            format!("\u{25a0} {}", project.name),
            Style::fg(project.theme).on(PAPER).bold(),
        ));
        push_wrapped(&mut lines, project.description, width, muted);
        lines.push((
            format!("\u{2192} Source Code: {}", project.link),
            Style::fg(ACCENT).on(PAPER),
        ));
        lines.push((String::new(), body));
    }
    lines.push(("\u{2500}".repeat(width), Style::fg(DISABLED).on(PAPER)));
    lines.push((String::new(), body));
    push_wrapped(
        &mut lines,
        "Have a project in mind? Let's connect and build something together!",
        width,
        body.bold(),
    );
    lines.push((String::new(), body));
    // Last line doubles as the button
    lines.push((CONTACT_BUTTON.to_string(), Style::fg(PAPER).on(ACCENT).bold()));
    lines
}

const CONTACT_BUTTON: &str = "[ Contact \u{2192} ]";

/// Draws the project gallery; clamps `scroll` to the content and returns
/// the contact button when it is on screen
pub fn draw_portfolio(canvas: &mut Canvas, scroll: &mut usize) -> Option<Rect> {
    canvas.clear(PAPER);
    let lines = portfolio_lines(page_width(canvas));
    let visible = canvas.rows.saturating_sub(NAV_ROWS + 1);
    *scroll = (*scroll).min(lines.len().saturating_sub(visible));
    draw_lines(canvas, &lines, *scroll, canvas.rows);

    let row = NAV_ROWS + 1 + (lines.len() - 1).checked_sub(*scroll)?;
    (row < canvas.rows).then(|| Rect {
        col: MARGIN,
        row,
        width: CONTACT_BUTTON.chars().count().min(canvas.cols.saturating_sub(MARGIN)),
        height: 1,
    })
}

pub fn draw_contact(canvas: &mut Canvas) {
    canvas.clear(PAPER);
    let body = Style::fg(INK).on(PAPER);
    let mut lines = vec![
        ("Get in Touch".to_string(), Style::fg(ACCENT).on(PAPER).bold()),
        (String::new(), body),
    ];
    push_wrapped(
        &mut lines,
        "Need a project done or looking for a developer? Feel free to contact me.",
        page_width(canvas),
        body,
    );
    lines.push((String::new(), body));
    for social in SOCIAL_LINKS {
        lines.push((format!("{:<10}{}", social.name, social.link), body));
    }
    draw_lines(canvas, &lines, 0, canvas.rows);
}

/// Debug lines in the top-left corner, under the navigation bar
pub fn draw_debug(canvas: &mut Canvas, lines: &[String]) {
    let style = Style::fg([255, 255, 255]).on([0, 0, 0]);
    for (i, line) in lines.iter().enumerate() {
        let _ = canvas.put_str(0, NAV_ROWS + i, line, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of_row(canvas: &Canvas, row: usize) -> String {
        canvas.row(row).iter().map(|cell| cell.ch).collect()
    }

    #[test]
    fn nav_tabs_are_laid_out_in_order() {
        let mut canvas = Canvas::new(80, 4);
        let tabs = draw_nav(&mut canvas, Route::About);
        assert_eq!(tabs.len(), 4);
        assert!(tabs.windows(2).all(|pair| pair[0].0.col < pair[1].0.col));
        assert!(text_of_row(&canvas, 0).contains("2 About"));
    }

    #[test]
    fn resume_pages_show_different_content() {
        let first = resume_lines(1, 60);
        let second = resume_lines(2, 60);
        assert_eq!(first[0].0, "Work Experience");
        assert_eq!(second[0].0, "Skills");
        assert!(second.iter().any(|(line, _)| line.contains("React")));
    }

    #[test]
    fn resume_buttons_do_not_overlap() {
        let mut canvas = Canvas::new(80, 24);
        let buttons = draw_about(&mut canvas, &Pagination::new(2));
        assert_eq!(buttons.previous.row, 22);
        assert!(buttons.previous.col + buttons.previous.width <= buttons.next.col);
        assert!(text_of_row(&canvas, 22).contains("Page 1 of 2"));
    }

    #[test]
    fn portfolio_scroll_is_clamped() {
        let mut canvas = Canvas::new(80, 24);
        let mut scroll = 10_000;
        draw_portfolio(&mut canvas, &mut scroll);
        let total = portfolio_lines(76).len();
        assert_eq!(scroll, total - 22);
        assert!(text_of_row(&canvas, 23).contains("Contact"));
    }

    #[test]
    fn gallery_ends_with_a_contact_button() {
        let lines = portfolio_lines(76);
        assert!(lines.iter().any(|(line, _)| line.contains("Let's connect")));
        assert_eq!(lines.last().map(|(line, _)| line.as_str()), Some(CONTACT_BUTTON));

        let mut canvas = Canvas::new(80, 24);
        let mut scroll = 0;
        assert_eq!(draw_portfolio(&mut canvas, &mut scroll), None);

        scroll = usize::MAX;
        let button = draw_portfolio(&mut canvas, &mut scroll);
        assert_eq!(
            button,
            Some(Rect {
                col: MARGIN,
                row: 23,
                width: CONTACT_BUTTON.chars().count(),
                height: 1,
            })
        );
    }
}
