use indicatif::ProgressStyle;

const FILES_TEMPLATE: &str = "{spinner} {msg:30} {wide_bar:} {pos:>3}/{len} files";

pub struct ProgressStyleTemplate;

impl ProgressStyleTemplate {
    pub fn files_bar() -> ProgressStyle {
        ProgressStyle::with_template(FILES_TEMPLATE)
            .unwrap()
            .progress_chars("#>-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicatif::ProgressBar;

    #[test]
    fn test_files_bar_counts_files() {
        let pb = ProgressBar::hidden().with_style(ProgressStyleTemplate::files_bar());
        pb.set_length(3);
        pb.set_message("merge-requests-01.json");
        pb.inc(1);
        pb.inc(1);
        assert_eq!(pb.position(), 2);
        assert_eq!(pb.message(), "merge-requests-01.json");
    }

    #[test]
    fn test_files_bar_template_shows_position_and_message() {
        assert!(FILES_TEMPLATE.contains("{pos"));
        assert!(FILES_TEMPLATE.contains("{len}"));
        assert!(FILES_TEMPLATE.contains("{msg"));
    }
}
