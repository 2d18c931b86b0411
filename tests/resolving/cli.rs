#[cfg(test)]
mod verify {
    use std::fs;
    use std::path::Path;
    use std::process::{Command, Output};

    fn reportage(arguments: &[&str], directory: &Path) -> Output {
        Command::new(env!("CARGO_BIN_EXE_reportage"))
            .args(arguments)
            .current_dir(directory)
            .output()
            .unwrap()
    }

    const EMITTED: &str = concat!(
        "<html>\n",
        "<body>\n",
        "<div class=\"reportage-main-container\">\n",
        "<p>See <a href=\"#ref-id00000000000000000001\">id00000000000000000001</a></p>\n",
        "<h1 id=\"ch_intro_1\">Intro<a class=\"reportage-anchor-link\" href=\"#ch_intro_1\">\u{b6}</a></h1>\n",
        "<div class=\"reportage-caption\"><a id=\"table-id00000000000000000001-1\"><b>Table 1.</b></a></div>\n",
        "</div>\n",
        "</body>\n",
        "</html>\n",
    );

    #[test]
    fn resolve_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir
            .path()
            .join("report.html");
        fs::write(&file, EMITTED).unwrap();

        let output = reportage(&["resolve", "--toc", "report.html"], dir.path());
        assert!(output
            .status
            .success());

        let result = fs::read_to_string(&file).unwrap();
        assert!(result.contains("<a href=\"#table-1\">1</a>"));
        assert!(result.contains("<h1 id=\"toc_generated_0\">Table of Contents"));
        assert!(result.contains("<a href=\"#ch_intro_1\">Intro</a><br/>"));
    }

    #[test]
    fn resolve_elsewhere() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path()
                .join("report.html"),
            EMITTED,
        )
        .unwrap();

        let output = reportage(
            &["resolve", "report.html", "--output", "final.html"],
            dir.path(),
        );
        assert!(output
            .status
            .success());

        let original = fs::read_to_string(
            dir.path()
                .join("report.html"),
        )
        .unwrap();
        assert_eq!(original, EMITTED);

        let result = fs::read_to_string(
            dir.path()
                .join("final.html"),
        )
        .unwrap();
        assert!(result.contains("<a id=\"table-1\">"));
        assert!(!result.contains("toc_generated_0"));
    }

    #[test]
    fn failed_resolution_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir
            .path()
            .join("report.html");
        let broken = EMITTED.replace("<div class=\"reportage-main-container\">\n", "");
        fs::write(&file, &broken).unwrap();

        let output = reportage(&["resolve", "--toc", "report.html"], dir.path());
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("error"));

        assert_eq!(fs::read_to_string(&file).unwrap(), broken);
    }

    #[test]
    fn missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let output = reportage(&["resolve", "nothing.html"], dir.path());
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("File not found"));
    }

    #[test]
    fn build_from_script() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path()
                .join("sales.sh"),
            concat!(
                "echo '<h1 id=\"ch_summary_1\">Summary<a class=\"reportage-anchor-link\" href=\"#ch_summary_1\">\u{b6}</a></h1>'\n",
                "echo \"<p>$1</p>\"\n",
                "case \"$REPORTAGE_SETTINGS\" in *\"toc = true\"*) echo '<p>with contents</p>' ;; esac\n",
            ),
        )
        .unwrap();
        fs::write(
            dir.path()
                .join("reportage.toml"),
            "interpreter = \"sh\"\npage_width = 60\n",
        )
        .unwrap();

        let output = reportage(
            &["build", "--toc", "--output", "site", "sales.sh", "--", "quarterly"],
            dir.path(),
        );
        assert!(
            output
                .status
                .success(),
            "{}",
            String::from_utf8_lossy(&output.stderr)
        );

        let result = fs::read_to_string(
            dir.path()
                .join("site")
                .join("sales.html"),
        )
        .unwrap();
        assert!(result.starts_with("<!DOCTYPE html>"));
        assert!(result.contains("<title>sales</title>"));
        assert!(result.contains("width: 60%;"));
        assert!(result.contains("<p>quarterly</p>"));
        assert!(result.contains("<p>with contents</p>"));
        assert!(result.contains("<a href=\"#ch_summary_1\">Summary</a><br/>"));
        assert!(result.ends_with("</html>\n"));
    }

    #[test]
    fn script_sets_title() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path()
                .join("sales.sh"),
            concat!(
                "echo '<title class=\"reportage-title\">Sales &amp; Returns</title>'\n",
                "echo '<h1 id=\"ch_summary_1\">Summary<a class=\"reportage-anchor-link\" href=\"#ch_summary_1\">\u{b6}</a></h1>'\n",
            ),
        )
        .unwrap();

        let output = reportage(
            &["build", "--toc", "--interpreter", "sh", "sales.sh"],
            dir.path(),
        );
        assert!(
            output
                .status
                .success(),
            "{}",
            String::from_utf8_lossy(&output.stderr)
        );

        let result = fs::read_to_string(
            dir.path()
                .join("sales.html"),
        )
        .unwrap();
        assert!(result.contains("<title class=\"reportage-title\">Sales &amp; Returns</title>\n<style>"));
        assert!(!result.contains("<title>sales</title>"));
        assert_eq!(
            result
                .matches("<title")
                .count(),
            1
        );
        assert!(result.contains("<h1 id=\"toc_generated_0\">Sales &amp; Returns<a"));
    }
}
