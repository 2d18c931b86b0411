#[cfg(test)]
mod verify {
    use reportage::resolving::{self, Options, Rule, Substitutor};

    const CONTAINER: &str = "<div class=\"reportage-main-container\">";

    fn document(lines: &[&str]) -> String {
        let mut result = String::new();
        for line in lines {
            result.push_str(line);
            result.push('\n');
        }
        result
    }

    #[test]
    fn link_written_before_table() {
        let input = document(&[
            CONTAINER,
            "<p>See <a href=\"#ref-id00000000000000000042\">id00000000000000000042</a></p>",
            "<div class=\"reportage-caption\"><a id=\"table-id00000000000000000042-5\"><b>Table 5.</b></a></div>",
        ]);

        let result = resolving::resolve(&input, &Options::default()).unwrap();

        assert!(result.contains("<a href=\"#table-5\">5</a>"));
        assert!(result.contains("<a id=\"table-5\">"));
        assert!(!result.contains("id00000000000000000042"));
    }

    #[test]
    fn contents_skip_a_level() {
        let input = document(&[
            CONTAINER,
            "<h1 id=\"ch_intro_1\">Intro<a class=\"reportage-anchor-link\" href=\"#ch_intro_1\">\u{b6}</a></h1>",
            "<h3 id=\"ch_details_2\">Details<a class=\"reportage-anchor-link\" href=\"#ch_details_2\">\u{b6}</a></h3>",
        ]);

        let result = resolving::resolve(&input, &Options { toc: true }).unwrap();
        let lines: Vec<&str> = result
            .lines()
            .collect();

        assert_eq!(lines[0], CONTAINER);
        assert!(lines[1].starts_with("<h1 id=\"toc_generated_0\">Table of Contents"));
        assert_eq!(
            &lines[2..8],
            &[
                "<a href=\"#ch_intro_1\">Intro</a><br/>",
                "<ul style=\"list-style-type:none; margin:0px\">",
                "<ul style=\"list-style-type:none; margin:0px\">",
                "<li><a href=\"#ch_details_2\">Details</a></li>",
                "</ul>",
                "</ul>",
            ]
        );
        assert!(lines[8].starts_with("<h1 id=\"ch_intro_1\">"));
    }

    #[test]
    fn dangling_reference_is_left_alone() {
        let input = document(&[
            CONTAINER,
            "<p>See <a href=\"#ref-id00000000000000000077\">later</a></p>",
        ]);

        let result = resolving::resolve(&input, &Options::default()).unwrap();
        assert_eq!(result, input);
    }

    #[test]
    fn heading_link_shows_heading_text() {
        let input = document(&[
            CONTAINER,
            "<p>As in <a href=\"#ref-id00000000000000000009\">id00000000000000000009</a></p>",
            "<h2 id=\"ch_id00000000000000000009_details_1\">Details<a class=\"reportage-anchor-link\" href=\"#ch_id00000000000000000009_details_1\">\u{b6}</a></h2>",
        ]);

        let result = resolving::resolve(&input, &Options::default()).unwrap();

        assert!(result.contains("<p>As in <a href=\"#ch_details_1\">Details</a></p>"));
        assert!(result.contains("<h2 id=\"ch_details_1\">Details<a class=\"reportage-anchor-link\" href=\"#ch_details_1\">"));
        assert!(!result.contains("id00000000000000000009"));
    }

    #[test]
    fn link_sites_must_be_rewritten_first() {
        let input = "<a href=\"#ref-id00000000000000000042\">id00000000000000000042</a>";

        let correct = Substitutor::from(vec![
            Rule::literal("ref-id00000000000000000042", "table-5").unwrap(),
            Rule::literal("id00000000000000000042(?:-5)?", "5").unwrap(),
        ]);
        assert_eq!(correct.apply(input), "<a href=\"#table-5\">5</a>");

        let swapped = Substitutor::from(vec![
            Rule::literal("id00000000000000000042(?:-5)?", "5").unwrap(),
            Rule::literal("ref-id00000000000000000042", "table-5").unwrap(),
        ]);
        assert_eq!(swapped.apply(input), "<a href=\"#ref-5\">5</a>");
    }

    #[test]
    fn every_kind_together() {
        let input = document(&[
            CONTAINER,
            "<p><a href=\"#ref-id101\">id101</a> <a href=\"#ref-id202\">id202</a> <a href=\"#ref-id303\">id303</a> <a href=\"#ref-id404\">id404</a> <a href=\"#ref-id505\">id505</a></p>",
            "<a id=\"table-id101-1\"><b>Table 1.</b></a>",
            "<a id=\"table-2\"><b>Table 2.</b></a>",
            "<a id=\"img-id202-1\"><b>Figure 1.</b></a>",
            "<a id=\"code-block-1\"><b>Source 1.</b></a>",
            "<a id=\"code-block-id303-2\"><b>Source 2.</b></a>",
            "<h1 id=\"ch_id404_results_1\">Results<a class=\"reportage-anchor-link\" href=\"#ch_id404_results_1\">\u{b6}</a></h1>",
        ]);

        let result = resolving::resolve(&input, &Options::default()).unwrap();

        let expected = document(&[
            CONTAINER,
            "<p><a href=\"#table-1\">1</a> <a href=\"#img-1\">1</a> <a href=\"#code-block-2\">2</a> <a href=\"#ch_results_1\">Results</a> <a href=\"#ref-id505\">id505</a></p>",
            "<a id=\"table-1\"><b>Table 1.</b></a>",
            "<a id=\"table-2\"><b>Table 2.</b></a>",
            "<a id=\"img-1\"><b>Figure 1.</b></a>",
            "<a id=\"code-block-1\"><b>Source 1.</b></a>",
            "<a id=\"code-block-2\"><b>Source 2.</b></a>",
            "<h1 id=\"ch_results_1\">Results<a class=\"reportage-anchor-link\" href=\"#ch_results_1\">\u{b6}</a></h1>",
        ]);
        assert_eq!(result, expected);
    }

    #[test]
    fn token_prefixes_stay_apart() {
        let input = document(&[
            CONTAINER,
            "<p><a href=\"#ref-id5\">id5</a> <a href=\"#ref-id55\">id55</a></p>",
            "<a id=\"table-id5-1\"><b>Table 1.</b></a>",
            "<a id=\"img-id55-2\"><b>Figure 2.</b></a>",
        ]);

        let result = resolving::resolve(&input, &Options::default()).unwrap();

        let expected = document(&[
            CONTAINER,
            "<p><a href=\"#table-1\">1</a> <a href=\"#img-2\">2</a></p>",
            "<a id=\"table-1\"><b>Table 1.</b></a>",
            "<a id=\"img-2\"><b>Figure 2.</b></a>",
        ]);
        assert_eq!(result, expected);
    }

    #[test]
    fn heading_token_prefixes_stay_apart() {
        let input = document(&[
            CONTAINER,
            "<p><a href=\"#ref-id5\">id5</a> <a href=\"#ref-id55\">id55</a></p>",
            "<h1 id=\"ch_id5_one_1\">One<a class=\"reportage-anchor-link\" href=\"#ch_id5_one_1\">\u{b6}</a></h1>",
            "<h1 id=\"ch_id55_two_2\">Two<a class=\"reportage-anchor-link\" href=\"#ch_id55_two_2\">\u{b6}</a></h1>",
        ]);

        let result = resolving::resolve(&input, &Options::default()).unwrap();

        assert!(result.contains("<p><a href=\"#ch_one_1\">One</a> <a href=\"#ch_two_2\">Two</a></p>"));
        assert!(result.contains("<h1 id=\"ch_one_1\">"));
        assert!(result.contains("<h1 id=\"ch_two_2\">"));
    }

    #[test]
    fn failure_leaves_nothing_behind() {
        let input = document(&[
            "<p>no container here</p>",
            "<h1 id=\"ch_intro_1\">Intro</h1>",
        ]);

        assert!(resolving::resolve(&input, &Options { toc: true }).is_err());
    }
}
