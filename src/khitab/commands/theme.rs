use crate::commands::{CmdMessage, CmdResult, KhitabPaths};
use crate::config::KhitabConfig;
use crate::error::Result;
use crate::theme::{self, Theme};

/// Show the effective theme, or persist an explicit preference.
pub fn run(paths: &KhitabPaths, set: Option<Theme>) -> Result<CmdResult> {
    let mut config = KhitabConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    match set {
        Some(preference) => {
            config.theme = Some(preference);
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success(format!("Theme set to {}", preference)));
        }
        None => {
            let effective = theme::effective(config.theme);
            let source = if config.theme.is_some() {
                "configured"
            } else {
                "system"
            };
            result.add_message(CmdMessage::info(format!("Theme: {} ({})", effective, source)));
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_persists_and_show_reports_it() {
        let dir = tempfile::tempdir().unwrap();
        let paths = KhitabPaths {
            data_dir: dir.path().to_path_buf(),
        };

        run(&paths, Some(Theme::Dark)).unwrap();
        assert_eq!(
            KhitabConfig::load(dir.path()).unwrap().theme,
            Some(Theme::Dark)
        );

        let shown = run(&paths, None).unwrap();
        assert!(shown.messages[0].content.contains("dark (configured)"));
    }
}
