#[cfg(test)]
mod verify {
    use reportage::config::{Position, Settings};
    use reportage::emitting::{bold, code, ulist, Session};
    use reportage::language::{EmissionError, Reference};
    use reportage::compile;
    use reportage::templating::Html;

    #[test]
    fn no_placeholders_survive() {
        let settings = Settings {
            toc: true,
            numbered_headings: true,
            numbered_tables: true,
            numbered_figures: true,
            figure_captions: Position::Top,
            ..Default::default()
        };
        let mut session = Session::new(settings);

        let references: Vec<Reference> = (0..6)
            .map(|_| Reference::new())
            .collect();

        // links to everything up front, before any of it exists
        for reference in &references {
            session.paragraph(&reference.link());
        }

        session
            .heading(1, "Overview", Some(&references[0]))
            .unwrap();
        session
            .table("<table><tr><td>1</td></tr></table>", Some("Sales"), Some(&references[1]))
            .unwrap();
        session
            .heading(2, "camelCase Section", Some(&references[2]))
            .unwrap();
        session
            .figure("<img src=\"plot.png\"/>", None, Some(&references[3]))
            .unwrap();
        session
            .code_block("fn main() {}", Some("rust"), Some("Entry point"), Some(&references[4]))
            .unwrap();
        session
            .heading(4, "Deep <em>down</em>", Some(&references[5]))
            .unwrap();

        let html = session
            .finish(&Html, "sales")
            .unwrap();

        let leftover = compile!(r"id\d{20}");
        assert!(
            !leftover.is_match(&html),
            "placeholder left in {}",
            html
        );

        assert!(html.contains("<a href=\"#ch_1_overview_1\">1\u{a0}\u{a0}Overview</a>"));
        assert!(html.contains("<a href=\"#table-1\">1</a>"));
        assert!(html.contains("<a href=\"#ch_1_1_camel_case_section_2\">1.1\u{a0}\u{a0}camelCase Section</a>"));
        assert!(html.contains("<a href=\"#img-1\">1</a>"));
        assert!(html.contains("<a href=\"#code-block-1\">1</a>"));
        assert!(html.contains("<title>sales</title>"));
    }

    #[test]
    fn labelled_reference_keeps_its_label() {
        let mut session = Session::new(Settings::default());
        let reference = Reference::labelled("the sales table");

        session.paragraph(&format!("See {}.", reference.link()));
        session
            .table("<table></table>", None, Some(&reference))
            .unwrap();

        let html = session
            .finish(&Html, "report")
            .unwrap();
        assert!(html.contains("<div>See <a href=\"#table-1\">the sales table</a>.</div>"));
    }

    #[test]
    fn inline_markup_in_headings() {
        let settings = Settings {
            toc: true,
            ..Default::default()
        };
        let mut session = Session::new(settings);
        let reference = Reference::new();

        session.paragraph(&format!("See {}.", reference.link()));
        let text = format!(
            "The {} function",
            code(Some("rust"))
                .render(&["main"])
                .unwrap()
        );
        session
            .heading(2, &text, Some(&reference))
            .unwrap();
        session.print(
            &ulist()
                .item(|tag| tag.class("point"))
                .render(&[bold().render(&["one"]).unwrap(), "two".to_string()])
                .unwrap(),
        );

        let html = session
            .finish(&Html, "report")
            .unwrap();

        assert!(html.contains("<div>See <a href=\"#ch_the_code_class_inline_highlight_rustmaincode_function_1\">The main function</a>.</div>"));
        assert!(html.contains("<li><a href=\"#ch_the_code_class_inline_highlight_rustmaincode_function_1\">The main function</a></li>"));
        assert!(html.contains("<ul><li class=\"point\"><b>one</b></li><li class=\"point\">two</li></ul>"));
    }

    #[test]
    fn references_belong_to_one_fragment() {
        let mut session = Session::new(Settings::default());
        let reference = Reference::new();

        session
            .heading(1, "First", Some(&reference))
            .unwrap();
        assert!(matches!(
            session.heading(1, "Second", Some(&reference)),
            Err(EmissionError::DuplicateReference(_))
        ));
    }

    #[test]
    fn sessions_are_independent() {
        let reference = Reference::new();

        let mut one = Session::new(Settings::default());
        one.table("<table></table>", None, Some(&reference))
            .unwrap();

        let mut two = Session::new(Settings::default());
        two.table("<table></table>", None, None)
            .unwrap();
        two.table("<table></table>", None, Some(&reference))
            .unwrap();

        let one = one
            .finish(&Html, "one")
            .unwrap();
        let two = two
            .finish(&Html, "two")
            .unwrap();
        assert!(one.contains("<a id=\"table-1\">"));
        assert!(two.contains("<a id=\"table-2\">"));
    }
}
