//! Compatibility test suite
//!
//! Drives the public wrapper end to end: Vim pattern -> host source ->
//! host regex -> real matching, checking both the emitted translation
//! and the observable behaviour against what Vim would do.

use vimgex::{compile, CompileError, Options, VimRegex};

mod scenarios {
    use super::*;

    #[test]
    fn test_keyword_run() {
        let options = Options::new()
            .iskeyword("@,48-57,_,192-255")
            .flags("i");
        let regex = compile("\\k\\+", options).unwrap();
        assert_eq!(regex.flags(), "isv");
        assert!(regex.host_source().ends_with('+'));
        assert!(regex.is_match("Foo"));
        assert!(regex.is_match("x1"));
        assert!(!regex.is_match("!!!"));
        assert!(!regex.is_match(""));
    }

    #[test]
    fn test_group_alternation() {
        let regex = VimRegex::new("\\(foo\\|bar\\)").unwrap();
        assert_eq!(regex.host_source(), "(foo|bar)");
        assert_eq!(regex.flags(), "sv");
        assert!(regex.is_match("foo"));
        assert!(regex.is_match("bar"));
        assert!(!regex.is_match("baz"));
    }

    #[test]
    fn test_counted_repeat() {
        let regex = VimRegex::new("x\\{2,3}").unwrap();
        assert_eq!(regex.host_source(), "x{2,3}");
        assert!(regex.is_match("xx"));
        assert!(regex.is_match("xxx"));
        assert!(!regex.is_match("x"));
    }

    #[test]
    fn test_anchor_string_match() {
        let regex = compile("^foo", Options::new().string_match(true)).unwrap();
        assert_eq!(regex.host_source(), "^foo");
        assert!(regex.is_match("foo"));
        assert!(!regex.is_match("xfoo"));
        assert!(!regex.is_match("a\nfoo"));
    }

    #[test]
    fn test_anchor_line_match() {
        let regex = compile("^foo", Options::new().string_match(false)).unwrap();
        assert_eq!(regex.host_source(), "(?:^|(?<=\\n))foo");
        assert!(regex.is_match("foo"));
        assert!(regex.is_match("a\nfoo"));
        assert!(!regex.is_match("xfoo"));
    }

    #[test]
    fn test_set_start_unsupported() {
        let err = VimRegex::new("\\zs").unwrap_err();
        assert_eq!(err, CompileError::unsupported("\\zs", "\\zs", 0));
    }

    #[test]
    fn test_bad_fname_option() {
        let err = compile("[[:fname:]]", Options::new().isfname("XYZ")).unwrap_err();
        assert_eq!(err, CompileError::bad_option("Invalid keyword", "XYZ", 0));
    }

    #[test]
    fn test_dangling_lookahead() {
        let err = VimRegex::new("\\@=").unwrap_err();
        assert_eq!(err, CompileError::invalid("Nothing to repeat", "\\@=", 0));
    }

    #[test]
    fn test_concat_intersection() {
        let regex = VimRegex::new("foo\\&..x").unwrap();
        assert_eq!(regex.host_source(), "(?=foo)[^\\n][^\\n]x");
        assert!(!regex.is_match("barx"));

        // all segments match at the same position; the branch matches
        // the last segment's extent
        let regex = VimRegex::new("foobar\\&...").unwrap();
        let found = regex.find("foobar").unwrap();
        assert_eq!(found.as_str(), "foo");
        assert!(!regex.is_match("fo"));
    }
}

mod anchors {
    use super::*;

    #[test]
    fn test_line_anchors_at_embedded_newlines() {
        let start = VimRegex::new("^foo").unwrap();
        assert!(start.is_match("bar\nfoo"));
        assert!(!start.is_match("barfoo"));

        let end = VimRegex::new("foo$").unwrap();
        assert!(end.is_match("foo\nbar"));
        assert!(!end.is_match("foobar"));
    }

    #[test]
    fn test_mid_pattern_anchors_are_literal() {
        let regex = VimRegex::new("a^b").unwrap();
        assert!(regex.is_match("a^b"));
        let regex = VimRegex::new("a$b").unwrap();
        assert!(regex.is_match("a$b"));
        assert!(!regex.is_match("ab"));
    }

    #[test]
    fn test_string_boundary_anchors() {
        let regex = VimRegex::new("\\%^foo").unwrap();
        assert!(regex.is_match("foo"));
        assert!(!regex.is_match("a\nfoo"));

        let regex = VimRegex::new("foo\\%$").unwrap();
        assert!(regex.is_match("a\nfoo"));
        assert!(!regex.is_match("foo\nbar"));
    }

    #[test]
    fn test_anchor_after_alternation_and_newline() {
        let regex = VimRegex::new("x\\|^y").unwrap();
        assert!(regex.is_match("a\ny"));
        let regex = VimRegex::new("a\\n^b").unwrap();
        assert!(regex.is_match("a\nb"));
    }

    #[test]
    fn test_word_boundaries() {
        let regex = VimRegex::new("\\<foo\\>").unwrap();
        assert!(regex.is_match("foo"));
        assert!(regex.is_match("a foo b"));
        assert!(!regex.is_match("foobar"));
        assert!(!regex.is_match("barfoo"));
    }

    #[test]
    fn test_word_boundary_honours_iskeyword() {
        // with `-` a keyword character, "x-y" is one word
        let tight = compile("\\<x\\>", Options::new().iskeyword("@,-")).unwrap();
        assert!(!tight.is_match("x-y"));
        let loose = VimRegex::new("\\<x\\>").unwrap();
        assert!(loose.is_match("x-y"));
    }
}

mod atoms {
    use super::*;

    #[test]
    fn test_dot_excludes_newline() {
        let regex = VimRegex::new("a.b").unwrap();
        assert!(regex.is_match("axb"));
        assert!(!regex.is_match("a\nb"));

        let any = VimRegex::new("a\\_.b").unwrap();
        assert!(any.is_match("a\nb"));
    }

    #[test]
    fn test_digit_classes() {
        let regex = VimRegex::new("\\d\\+").unwrap();
        assert!(regex.is_match("042"));
        assert!(!regex.is_match("abc"));

        let negated = VimRegex::new("\\D").unwrap();
        assert!(negated.is_match("x"));
        assert!(!negated.is_match("5"));
        assert!(!negated.is_match("\n"));

        let with_newline = VimRegex::new("\\_D").unwrap();
        assert!(with_newline.is_match("\n"));
    }

    #[test]
    fn test_hex_and_octal_classes() {
        let hex = VimRegex::new("\\x\\+").unwrap();
        assert_eq!(hex.find("zzcafezz").unwrap().as_str(), "cafe");
        let octal = VimRegex::new("\\o\\+").unwrap();
        assert_eq!(octal.find("9702").unwrap().as_str(), "702");
    }

    #[test]
    fn test_case_classes() {
        let lower = VimRegex::new("\\l").unwrap();
        assert!(lower.is_match("a"));
        assert!(!lower.is_match("A"));
        let upper = VimRegex::new("\\u").unwrap();
        assert!(upper.is_match("A"));
        assert!(!upper.is_match("a"));
    }

    #[test]
    fn test_identifier_class_is_ascii() {
        let regex = VimRegex::new("\\i\\+").unwrap();
        assert!(regex.is_match("foo_42"));
        assert!(!regex.is_match("!?!"));
    }

    #[test]
    fn test_keyword_class_covers_unicode_words() {
        let regex = VimRegex::new("\\k\\+").unwrap();
        assert!(regex.is_match("変数"));
        assert!(!regex.is_match("!!!"));
    }

    #[test]
    fn test_escaped_control_literals() {
        let regex = VimRegex::new("a\\tb").unwrap();
        assert!(regex.is_match("a\tb"));
        let regex = VimRegex::new("a\\nb").unwrap();
        assert!(regex.is_match("a\nb"));
    }

    #[test]
    fn test_numeric_character_references() {
        let regex = VimRegex::new("\\%d65\\%x42").unwrap();
        assert!(regex.is_match("AB"));
        let regex = VimRegex::new("\\%u20ac").unwrap();
        assert!(regex.is_match("€"));
    }

    #[test]
    fn test_overflowing_reference_never_matches() {
        let regex = VimRegex::new("\\%Uffffffff").unwrap();
        assert!(!regex.is_match("anything"));
        // quantified it still compiles, and zero repetitions match
        let starred = VimRegex::new("x\\%Uffffffff*").unwrap();
        assert!(starred.is_match("x"));
    }
}

mod quantifiers {
    use super::*;

    #[test]
    fn test_greedy_forms() {
        let star = VimRegex::new("ab*").unwrap();
        assert_eq!(star.find("abbbc").unwrap().as_str(), "abbb");
        let plus = VimRegex::new("ab\\+").unwrap();
        assert!(!plus.is_match("ac"));
        let opt = VimRegex::new("ab\\=c").unwrap();
        assert!(opt.is_match("ac"));
        assert!(opt.is_match("abc"));
    }

    #[test]
    fn test_lazy_forms() {
        let lazy = VimRegex::new("a.\\{-}b").unwrap();
        assert_eq!(lazy.find("axxbyyb").unwrap().as_str(), "axxb");
        let bounded = VimRegex::new("x\\{-1,}").unwrap();
        assert_eq!(bounded.find("xxx").unwrap().as_str(), "x");
    }

    #[test]
    fn test_bound_clamping() {
        let regex = VimRegex::new("x\\{3,2}").unwrap();
        assert_eq!(regex.find("xxxx").unwrap().as_str(), "xx");
    }

    #[test]
    fn test_open_bounds() {
        let regex = VimRegex::new("x\\{,2}y").unwrap();
        assert!(regex.is_match("y"));
        assert!(regex.is_match("xxy"));
        let regex = VimRegex::new("x\\{2,}").unwrap();
        assert!(!regex.is_match("x"));
        assert!(regex.is_match("xx"));
    }
}

mod groups {
    use super::*;

    #[test]
    fn test_captures() {
        let regex = VimRegex::new("\\(\\d\\+\\)-\\(\\d\\+\\)").unwrap();
        let caps = regex.captures("12-34").unwrap();
        assert_eq!(caps.get(1).map(|g| g.as_str()), Some("12"));
        assert_eq!(caps.get(2).map(|g| g.as_str()), Some("34"));
    }

    #[test]
    fn test_non_capturing_group() {
        let regex = VimRegex::new("\\%(ab\\)\\+\\(c\\)").unwrap();
        let caps = regex.captures("ababc").unwrap();
        assert_eq!(caps.get(1).map(|g| g.as_str()), Some("c"));
    }

    #[test]
    fn test_backreference() {
        let regex = VimRegex::new("\\(\\a\\+\\) \\1").unwrap();
        assert!(regex.is_match("go go"));
        assert!(!regex.is_match("go stop"));
    }

    #[test]
    fn test_backref_then_literal_digit() {
        let regex = VimRegex::new("\\(a\\)\\10").unwrap();
        assert!(regex.is_match("aa0"));
        assert!(!regex.is_match("aa1"));
    }

    #[test]
    fn test_lookahead() {
        let regex = VimRegex::new("foo\\(bar\\)\\@=").unwrap();
        let found = regex.find("foobar").unwrap();
        assert_eq!(found.as_str(), "foo");
        assert!(!regex.is_match("foobaz"));
    }

    #[test]
    fn test_negative_lookahead() {
        let regex = VimRegex::new("foo\\(bar\\)\\@!").unwrap();
        assert!(!regex.is_match("foobar"));
        assert!(regex.is_match("foobaz"));
    }

    #[test]
    fn test_lookbehind() {
        let regex = VimRegex::new("\\(foo\\)\\@<=bar").unwrap();
        assert_eq!(regex.find("foobar").unwrap().as_str(), "bar");
        assert!(!regex.is_match("bazbar"));
    }

    #[test]
    fn test_negative_lookbehind() {
        let regex = VimRegex::new("\\(foo\\)\\@<!bar").unwrap();
        assert!(regex.is_match("bazbar"));
        assert!(!regex.is_match("foobar"));
    }

    #[test]
    fn test_bounded_lookbehind_prefix_ignored() {
        let regex = VimRegex::new("\\(foo\\)\\@123<=bar").unwrap();
        assert!(regex.is_match("foobar"));
    }
}

mod collections {
    use super::*;

    #[test]
    fn test_plain_and_negated() {
        let regex = VimRegex::new("[abc]").unwrap();
        assert!(regex.is_match("b"));
        assert!(!regex.is_match("d"));

        let negated = VimRegex::new("[^abc]").unwrap();
        assert!(negated.is_match("d"));
        assert!(!negated.is_match("a"));
    }

    #[test]
    fn test_ranges() {
        let regex = VimRegex::new("[a-fA-F]\\+").unwrap();
        assert_eq!(regex.find("zzBeefzz").unwrap().as_str(), "Beef");
    }

    #[test]
    fn test_reserved_characters_stay_literal() {
        let regex = VimRegex::new("[a.b]").unwrap();
        assert!(regex.is_match("."));
        assert!(!regex.is_match("x"));

        let regex = VimRegex::new("[(|)]").unwrap();
        assert!(regex.is_match("|"));
    }

    #[test]
    fn test_leading_bracket_literal() {
        let regex = VimRegex::new("[]x]").unwrap();
        assert!(regex.is_match("]"));
        assert!(regex.is_match("x"));
    }

    #[test]
    fn test_collection_escapes() {
        let regex = VimRegex::new("[\\t\\]]").unwrap();
        assert!(regex.is_match("\t"));
        assert!(regex.is_match("]"));

        let regex = VimRegex::new("[\\d65\\x42]").unwrap();
        assert!(regex.is_match("A"));
        assert!(regex.is_match("B"));
        assert!(!regex.is_match("C"));
    }

    #[test]
    fn test_named_classes() {
        let regex = VimRegex::new("[[:digit:][:upper:]]\\+").unwrap();
        assert!(regex.is_match("A1"));
        assert!(!regex.is_match("a!"));
    }

    #[test]
    fn test_option_backed_named_class() {
        let regex = compile("[[:ident:]]\\+", Options::new().isident("48-57")).unwrap();
        assert_eq!(regex.find("ab123cd").unwrap().as_str(), "123");
    }

    #[test]
    fn test_newline_collection() {
        let regex = VimRegex::new("a\\_[xy]b").unwrap();
        assert!(regex.is_match("axb"));
        assert!(regex.is_match("a\nb"));
        assert!(!regex.is_match("azb"));
    }

    #[test]
    fn test_unclosed_bracket_is_literal() {
        let regex = VimRegex::new("a[b").unwrap();
        assert!(regex.is_match("a[b"));
        assert!(!regex.is_match("ab"));
    }
}

mod magicness {
    use super::*;

    #[test]
    fn test_very_magic() {
        let regex = VimRegex::new("\\v(ab)+c{2}").unwrap();
        assert!(regex.is_match("ababcc"));
        assert!(!regex.is_match("abc"));
    }

    #[test]
    fn test_very_nomagic() {
        let regex = VimRegex::new("\\Va.c").unwrap();
        assert!(regex.is_match("a.c"));
        assert!(!regex.is_match("axc"));
    }

    #[test]
    fn test_nomagic_option() {
        let regex = compile("a.c", Options::new().magic(false)).unwrap();
        assert!(regex.is_match("a.c"));
        assert!(!regex.is_match("axc"));
    }

    #[test]
    fn test_switch_mid_pattern() {
        let regex = VimRegex::new(".\\V.").unwrap();
        assert!(regex.is_match("x."));
        assert!(!regex.is_match("xy"));
    }
}

mod case_handling {
    use super::*;

    #[test]
    fn test_ignorecase_option() {
        let regex = compile("foo", Options::new().ignorecase(true)).unwrap();
        assert!(regex.is_match("FOO"));
    }

    #[test]
    fn test_smartcase() {
        let options = Options::new().ignorecase(true).smartcase(true);
        let upper = compile("Foo", options.clone()).unwrap();
        assert!(upper.is_match("Foo"));
        assert!(!upper.is_match("foo"));

        let lower = compile("foo", options).unwrap();
        assert!(lower.is_match("FOO"));
    }

    #[test]
    fn test_case_switch_in_pattern() {
        let on = VimRegex::new("\\cFOO").unwrap();
        assert!(on.is_match("foo"));

        let off = compile("\\Cfoo", Options::new().ignorecase(true)).unwrap();
        assert!(!off.is_match("FOO"));
    }
}

mod errors {
    use super::*;

    #[test]
    fn test_invalid_patterns() {
        for pattern in ["*", "a\\{2", "ab\\)", "\\(ab", "\\_;"] {
            assert!(
                matches!(VimRegex::new(pattern), Err(CompileError::InvalidPattern { .. })),
                "expected InvalidPattern for {pattern:?}"
            );
        }
    }

    #[test]
    fn test_invalid_flags() {
        for flags in ["m", "u", "x", "gm"] {
            let err = VimRegex::with_flags("foo", flags).unwrap_err();
            assert!(
                matches!(err, CompileError::InvalidPattern { ref message, .. } if message == "Invalid flags"),
                "expected flag error for {flags:?}"
            );
        }
    }

    #[test]
    fn test_unsupported_features() {
        for pattern in [
            "a\\zsb", "a\\zeb", "\\%V", "\\%#", "\\%'a", "\\%23l", "\\%<5c", "\\%>.v",
            "\\(a\\)\\@>", "\\%[read]", "\\%Ca", "\\Za", "\\z(a\\)", "\\z1", "a~b", "\\%#=1a",
            "[[=a=]]", "[[.a.]]",
        ] {
            assert!(
                matches!(VimRegex::new(pattern), Err(CompileError::UnsupportedFeature { .. })),
                "expected UnsupportedFeature for {pattern:?}"
            );
        }
    }

    #[test]
    fn test_unknown_posix_class() {
        let err = VimRegex::new("[[:wat:]]").unwrap_err();
        assert!(
            matches!(err, CompileError::InvalidPattern { ref message, .. } if message == "Invalid char class")
        );
    }

    #[test]
    fn test_errors_carry_positions() {
        let err = VimRegex::new("foo\\zs").unwrap_err();
        assert_eq!(err.offset(), 3);
        assert_eq!(err.source_text(), "foo\\zs");
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn test_empty_pattern_matches_empty() {
        let regex = VimRegex::new("").unwrap();
        assert!(regex.is_match(""));
        assert!(regex.is_match("anything"));
        assert_eq!(regex.flags(), "sv");
    }

    #[test]
    fn test_literal_run_roundtrip() {
        // non-metacharacter ASCII runs match exactly themselves
        for literal in ["hello", "a b c", "x=1;y=2", "don't"] {
            let regex = compile(literal, Options::new().string_match(true)).unwrap();
            let full = format!("\\%^{literal}\\%$");
            assert!(regex.is_match(literal), "{literal:?} should self-match");
            let exact = VimRegex::new(&full).unwrap();
            assert!(exact.is_match(literal));
        }
    }

    #[test]
    fn test_flag_invariants() {
        for (pattern, flags) in [("foo", ""), ("\\cfoo", ""), ("bar", "gdy")] {
            let regex = VimRegex::with_flags(pattern, flags).unwrap();
            assert!(regex.flags().contains('s'));
            assert!(regex.flags().contains('v'));
            assert!(!regex.flags().contains('m'));
            assert!(!regex.flags().contains('u'));
        }
    }

    #[test]
    fn test_compilation_is_idempotent() {
        let options = Options::new().flags("gi").iskeyword("@,48-57");
        let first = compile("\\<\\k\\{-1,}\\>\\s*$", options.clone()).unwrap();
        let second = compile("\\<\\k\\{-1,}\\>\\s*$", options).unwrap();
        assert_eq!(first.host_source(), second.host_source());
        assert_eq!(first.flags(), second.flags());
    }

    #[test]
    fn test_long_literal_pattern() {
        let pattern = "a".repeat(200);
        let regex = VimRegex::new(&pattern).unwrap();
        assert!(regex.is_match(&pattern));
    }

    #[test]
    fn test_rebuild_layers_options() {
        let base = compile("foo", Options::new().flags("g")).unwrap();
        let rebuilt = base.rebuild(Options::new().ignorecase(true)).unwrap();
        assert!(rebuilt.global());
        assert!(rebuilt.is_match("FOO"));
        // the original wrapper is untouched
        assert!(!base.is_match("FOO"));
    }
}
