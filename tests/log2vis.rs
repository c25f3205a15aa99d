mod common;

#[cfg(test)]
mod log2vis_tests {
    use crate::common;
    use rlbidi::{
        log2vis, BaseDirection, BidiError, Log2VisOptions, Outputs, ShapeFlags, TextDirection,
        UsageError, LTR, ON, RTL,
    };

    fn visual(text: &str, options: &Log2VisOptions) -> String {
        log2vis(&common::chars(text), options).unwrap().to_string()
    }

    #[test]
    fn test_empty() {
        let options = Log2VisOptions::new(RTL).outputs(Outputs::all());
        let result = log2vis(&[], &options).unwrap();
        assert!(result.text.is_empty());
        assert_eq!(result.positions_l_to_v, Some(Vec::new()));
        assert_eq!(result.positions_v_to_l, Some(Vec::new()));
        assert_eq!(result.embedding_levels, Some(Vec::new()));
    }

    #[test]
    fn test_big_string() {
        let text = "\u{05D0}".repeat(64 * 1024);
        assert_eq!(visual(&text, &Log2VisOptions::new(RTL)), text);
    }

    #[test]
    fn test_ltr_text_is_identity() {
        let options = Log2VisOptions::new(LTR).outputs(Outputs::all());
        let result = log2vis(&common::chars("hello world"), &options).unwrap();
        let identity: Vec<usize> = (0..11).collect();
        assert_eq!(result.to_string(), "hello world");
        assert_eq!(result.positions_l_to_v, Some(identity.clone()));
        assert_eq!(result.positions_v_to_l, Some(identity));
        assert_eq!(result.embedding_levels, Some(vec![0; 11]));
    }

    #[test]
    fn test_versions() {
        assert_eq!(rlbidi::VERSION, env!("CARGO_PKG_VERSION"));
        assert!(rlbidi::ALGORITHM_VERSION.contains("UAX #9"));
        assert_eq!(rlbidi::unicode_version().split('.').count(), 3);
    }

    #[test]
    fn test_default_direction_is_rtl() {
        let text = "hello - \u{05E9}\u{05DC}\u{05D5}\u{05DD}";
        assert_eq!(
            visual(text, &Log2VisOptions::default()),
            visual(text, &Log2VisOptions::new(RTL))
        );
    }

    #[test]
    fn test_rtl() {
        let text = "hello - \u{05E9}\u{05DC}\u{05D5}\u{05DD}";
        assert_eq!(
            visual(text, &Log2VisOptions::new(RTL)),
            "\u{05DD}\u{05D5}\u{05DC}\u{05E9} - hello"
        );
    }

    #[test]
    fn test_ltr() {
        let text = "hello - \u{05E9}\u{05DC}\u{05D5}\u{05DD}";
        assert_eq!(
            visual(text, &Log2VisOptions::new(LTR)),
            "hello - \u{05DD}\u{05D5}\u{05DC}\u{05E9}"
        );
    }

    #[test]
    fn test_on_ltr_text() {
        let text = "hello - \u{05E9}\u{05DC}\u{05D5}\u{05DD}";
        let result = log2vis(&common::chars(text), &Log2VisOptions::new(ON)).unwrap();
        assert_eq!(result.direction, TextDirection::LeftToRight);
        assert_eq!(
            result.to_string(),
            "hello - \u{05DD}\u{05D5}\u{05DC}\u{05E9}"
        );
    }

    #[test]
    fn test_on_rtl_text() {
        let text = "\u{05E9}\u{05DC}\u{05D5}\u{05DD} - hello";
        let result = log2vis(&common::chars(text), &Log2VisOptions::new(ON)).unwrap();
        assert_eq!(result.direction, TextDirection::RightToLeft);
        assert_eq!(
            result.to_string(),
            "hello - \u{05DD}\u{05D5}\u{05DC}\u{05E9}"
        );
    }

    #[test]
    fn test_direction_names_and_codes() {
        assert_eq!("RTL".parse::<BaseDirection>(), Ok(RTL));
        assert_eq!(
            "rll".parse::<BaseDirection>(),
            Err(UsageError::InvalidDirectionName(String::from("rll")))
        );
        let error: BidiError = BaseDirection::try_from(17).unwrap_err().into();
        assert_eq!(error, BidiError::Usage(UsageError::InvalidDirectionCode(17)));
    }

    #[test]
    fn test_reorder_nsm() {
        // chet patah yod sheva pe patah alef
        let text = "\u{05D7}\u{05B7}\u{05D9}\u{05B0}\u{05E4}\u{05B7}\u{05D0}";
        assert_eq!(
            visual(text, &Log2VisOptions::new(RTL)),
            "\u{05D0}\u{05E4}\u{05B7}\u{05D9}\u{05B0}\u{05D7}\u{05B7}"
        );
        assert_eq!(
            visual(text, &Log2VisOptions::new(RTL).reorder_nsm(false)),
            "\u{05D0}\u{05B7}\u{05E4}\u{05B0}\u{05D9}\u{05B7}\u{05D7}"
        );
    }

    #[test]
    fn test_arabic_sentence() {
        let text = "\u{0635}\u{0650}\u{0631}\u{064E}\u{0627}\u{0637}\u{064E} \
                    \u{0627}\u{0644}\u{0651}\u{064E}\u{0630}\u{0650}\u{064A}\u{0646}\u{064E} \
                    \u{0627}\u{064E}\u{0646}\u{0652}\u{0639}\u{064E}\u{0645}\u{0652}\u{062A}\u{064E} \
                    \u{0639}\u{064E}\u{0644}\u{064E}\u{064A}\u{0647}\u{0650}\u{0645}\u{0652} \
                    \u{063A}\u{064E}\u{064A}\u{0652}\u{0631}\u{0650} \
                    \u{0627}\u{0644}\u{0652}\u{0645}\u{064E}\u{063A}\u{0652}\u{0636}\u{064F}\u{0648}\u{0628}\u{0650} \
                    \u{0639}\u{064E}\u{0644}\u{064E}\u{064A}\u{0652}\u{0647}\u{0650}\u{0645} \
                    \u{0648}\u{064E} \
                    \u{0644}\u{064E}\u{0627} \
                    \u{0627}\u{0644}\u{0636}\u{0651}\u{064E}\u{0653}\u{0627}\u{0644}\u{0651}\u{0650}\u{064A}\u{0646}\u{064E}";
        let expected = "\u{FEE6}\u{064E}\u{FEF4}\u{FEDF}\u{0651}\u{0650}\u{FE8E}\u{FEC0}\u{0651}\u{064E}\u{0653}\u{FEDF}\u{FE8D} \
                        \u{FE8E}\u{FEDF}\u{064E} \
                        \u{FEED}\u{064E} \
                        \u{FEE2}\u{FEEC}\u{0650}\u{FEF4}\u{0652}\u{FEE0}\u{064E}\u{FECB}\u{064E} \
                        \u{FE8F}\u{0650}\u{FEEE}\u{FEC0}\u{064F}\u{FED0}\u{0652}\u{FEE4}\u{064E}\u{FEDF}\u{0652}\u{FE8D} \
                        \u{FEAE}\u{0650}\u{FEF4}\u{0652}\u{FECF}\u{064E} \
                        \u{FEE2}\u{0652}\u{FEEC}\u{0650}\u{FEF4}\u{FEE0}\u{064E}\u{FECB}\u{064E} \
                        \u{FE96}\u{064E}\u{FEE4}\u{0652}\u{FECC}\u{064E}\u{FEE7}\u{0652}\u{FE8D}\u{064E} \
                        \u{FEE6}\u{064E}\u{FEF3}\u{FEAC}\u{0650}\u{FEDF}\u{0651}\u{064E}\u{FE8D} \
                        \u{FEC1}\u{064E}\u{FE8D}\u{FEAE}\u{064E}\u{FEBB}\u{0650}";
        let options = Log2VisOptions::new(RTL).clean(true);
        assert_eq!(visual(text, &options), expected);
    }

    #[test]
    fn test_mirrored_brackets() {
        assert_eq!(visual("(abc)", &Log2VisOptions::new(RTL)), "(abc)");
        assert_eq!(
            visual("(\u{05D0}\u{05D1})", &Log2VisOptions::new(RTL)),
            "(\u{05D1}\u{05D0})"
        );
        let options = Log2VisOptions::new(RTL).shaping(ShapeFlags::empty());
        assert_eq!(
            visual("(\u{05D0}\u{05D1})", &options),
            ")\u{05D1}\u{05D0}("
        );
    }

    #[test]
    fn test_clean_removes_override() {
        let text = common::chars("\u{202E}hello");
        let options = Log2VisOptions::new(LTR).clean(true).outputs(Outputs::all());
        let result = log2vis(&text, &options).unwrap();
        assert_eq!(result.to_string(), "olleh");
        let v_to_l = result.positions_v_to_l.unwrap();
        assert_eq!(v_to_l.len(), text.len() - 1);
        assert_eq!(v_to_l, vec![4, 3, 2, 1, 0]);
        assert_eq!(result.embedding_levels, Some(vec![1; 5]));
    }

    #[test]
    fn test_lam_alef_ligature() {
        let options = Log2VisOptions::new(RTL).outputs(Outputs::V_TO_L);
        let result = log2vis(&common::chars("\u{0644}\u{0627}"), &options).unwrap();
        assert_eq!(common::string(&result.text), "\u{FEFB}\u{FEFF}");
        assert_eq!(result.positions_v_to_l, Some(vec![1, 0]));

        let result = log2vis(&common::chars("\u{0644}\u{0627}"), &options.clean(true)).unwrap();
        assert_eq!(common::string(&result.text), "\u{FEFB}");
        assert_eq!(result.positions_v_to_l, Some(vec![0]));
    }

    #[test]
    fn test_maps_are_inverse() {
        let texts = [
            "hello - \u{05E9}\u{05DC}\u{05D5}\u{05DD}",
            "\u{05D0}\u{05D1} 123 (x) \u{05D2}",
            "a\u{2067}\u{05D0} b\u{2069}c",
            "\u{202B}ab\u{202C} \u{0628}\u{0644}\u{0627}",
            "\u{05D7}\u{05B7}\u{05D9}\u{05B0} end",
        ];
        for text in texts.iter() {
            for direction in [LTR, RTL, ON] {
                for clean in [false, true] {
                    let options = Log2VisOptions::new(direction)
                        .clean(clean)
                        .outputs(Outputs::all());
                    let result = log2vis(&common::chars(text), &options).unwrap();
                    let l_to_v = result.positions_l_to_v.unwrap();
                    let v_to_l = result.positions_v_to_l.unwrap();
                    assert_eq!(v_to_l.len(), result.text.len());
                    assert_eq!(result.embedding_levels.unwrap().len(), result.text.len());
                    common::assert_inverse(&l_to_v, &v_to_l);
                }
            }
        }
    }
}
