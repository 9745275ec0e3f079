use jobboard_core::{AppViewModel, JobCardView, StatusStyle, LOADING_TEXT};

/// Console rendition of the view: status, loading, stats, then one block per card.
pub(crate) fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if !view.status.is_empty() {
        let prefix = match view.status.style {
            StatusStyle::Plain => "",
            StatusStyle::Success => "[ok] ",
            StatusStyle::Error => "[error] ",
        };
        lines.push(format!("{prefix}{}", view.status.text));
    }
    if view.loading {
        lines.push(LOADING_TEXT.to_string());
    }
    if let Some(stats) = &view.stats_text {
        lines.push(stats.clone());
    }
    for card in &view.cards {
        lines.extend(format_card(card));
    }
    lines
}

fn format_card(card: &JobCardView) -> Vec<String> {
    let number = card.entry.0 + 1;
    let mut lines = vec![
        format!("{number:>3}. {} - {} ({})", card.title, card.company, card.location),
        format!(
            "     {} | {} | {}",
            card.posted_label, card.source_label, card.job_url
        ),
    ];
    if !card.skills.is_empty() {
        lines.push(format!("     tags: {}", card.skills.join(", ")));
    }
    if card.expanded {
        for line in card.description.lines().filter(|l| !l.trim().is_empty()) {
            lines.push(format!("       {}", line.trim()));
        }
    }
    lines.push(format!("     [{}: toggle {number}]", card.toggle_label));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::{EntryId, StatusLine};

    fn card(expanded: bool) -> JobCardView {
        JobCardView {
            entry: EntryId(0),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            location: "NYC".to_string(),
            posted_label: "Date unknown".to_string(),
            source_label: "LinkedIn".to_string(),
            source_icon: "fab fa-linkedin",
            source_class: "source-linkedin".to_string(),
            skills: vec!["Go".to_string(), "Rust".to_string()],
            description: "Knows Go\n\nand Rust".to_string(),
            expanded,
            toggle_label: if expanded { "Show less" } else { "Show more" },
            job_url: "http://x".to_string(),
        }
    }

    #[test]
    fn collapsed_card_hides_description() {
        let view = AppViewModel {
            stats_text: Some("1 jobs found | 1 companies | 1 locations".to_string()),
            cards: vec![card(false)],
            ..AppViewModel::default()
        };
        let lines = render(&view);
        assert_eq!(lines[0], "1 jobs found | 1 companies | 1 locations");
        assert_eq!(lines[1], "  1. Engineer - Acme (NYC)");
        assert_eq!(lines[3], "     tags: Go, Rust");
        assert!(!lines.iter().any(|l| l.contains("Knows Go")));
        assert_eq!(lines.last().unwrap(), "     [Show more: toggle 1]");
    }

    #[test]
    fn expanded_card_prints_description_lines() {
        let view = AppViewModel {
            cards: vec![card(true)],
            ..AppViewModel::default()
        };
        let lines = render(&view);
        assert!(lines.contains(&"       Knows Go".to_string()));
        assert!(lines.contains(&"       and Rust".to_string()));
    }

    #[test]
    fn error_status_is_prefixed() {
        let view = AppViewModel {
            status: StatusLine::new("An error occurred", StatusStyle::Error),
            loading: true,
            ..AppViewModel::default()
        };
        assert_eq!(render(&view), vec!["[error] An error occurred", "Loading..."]);
    }
}
