use confini::{Document, Error, Options, Scalar, decode, decode_from_reader, decode_from_slice};

fn lf() -> Options {
    Options {
        line_ending: "\n".into(),
        ..Default::default()
    }
}

fn str_at<'a>(doc: &'a Document, section: &str, key: &str) -> Option<&'a str> {
    doc.section(section)?.get(key)?.as_str()
}

#[test]
fn stray_keys_and_sections() -> Result<(), Box<dyn std::error::Error>> {
    let doc = decode("stray=foo\n[Section1]\na=b\n", &lf())?;
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["stray", "Section1"]);
    assert_eq!(doc.scalar("stray"), Some(&Scalar::from("foo")));
    assert_eq!(str_at(&doc, "Section1", "a"), Some("b"));
    Ok(())
}

#[test]
fn comment_only_input_is_empty() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        comment_identifiers: vec![";".into(), "//".into(), "#".into()],
        ..lf()
    };
    let doc = decode(";comment1\n//comment2\n#comment3\n", &opts)?;
    assert!(doc.is_empty());
    Ok(())
}

#[test]
fn custom_assign_identifier() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        assign_identifier: ":".into(),
        ..lf()
    };
    let doc = decode("[Section]\nfoo:bar\n", &opts)?;
    assert_eq!(str_at(&doc, "Section", "foo"), Some("bar"));
    Ok(())
}

#[test]
fn multi_char_assign_identifier_is_skipped_whole() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        assign_identifier: " := ".into(),
        ..lf()
    };
    let doc = decode("a := b := c\n", &opts)?;
    assert_eq!(doc.scalar("a"), Some(&Scalar::from("b := c")));
    Ok(())
}

#[test]
fn key_without_delimiter_gets_default_value() -> Result<(), Box<dyn std::error::Error>> {
    let doc = decode("[flags]\nverbose\n", &lf())?;
    assert_eq!(doc.section("flags").and_then(|s| s.get("verbose")), Some(&Scalar::Bool(true)));

    let opts = Options {
        default_value: Scalar::from("yes"),
        ..lf()
    };
    let doc = decode("verbose\n", &opts)?;
    assert_eq!(doc.scalar("verbose"), Some(&Scalar::from("yes")));
    Ok(())
}

#[test]
fn default_options_split_on_crlf() -> Result<(), Box<dyn std::error::Error>> {
    let doc = decode("a=1\r\n[S]\r\nb=2\r\n", &Options::default())?;
    assert_eq!(doc.scalar("a"), Some(&Scalar::from("1")));
    assert_eq!(str_at(&doc, "S", "b"), Some("2"));
    Ok(())
}

#[test]
fn auto_detection_picks_separator() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        detect_line_ending: true,
        ..Default::default()
    };
    let doc = decode(";comment\n[SectionA]\nkey=value\n", &opts)?;
    assert_eq!(str_at(&doc, "SectionA", "key"), Some("value"));
    Ok(())
}

#[test]
fn auto_detection_propagates_ambiguity() {
    let opts = Options {
        detect_line_ending: true,
        ..Default::default()
    };
    assert!(matches!(
        decode("a=1\rb=2\nc=3", &opts),
        Err(Error::AmbiguousLineEnding)
    ));
}

#[test]
fn repeated_section_continues_and_overwrites() -> Result<(), Box<dyn std::error::Error>> {
    let doc = decode("[A]\nx=1\ny=2\n[B]\nz=3\n[A]\nx=9\nw=4\n", &lf())?;
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    let a = doc.section("A").ok_or("missing A")?;
    assert_eq!(a.keys().map(String::as_str).collect::<Vec<_>>(), vec!["x", "y", "w"]);
    assert_eq!(a.get("x"), Some(&Scalar::from("9")));
    Ok(())
}

#[test]
fn duplicate_stray_key_overwrites_in_place() -> Result<(), Box<dyn std::error::Error>> {
    let doc = decode("a=1\nb=2\na=3\n", &lf())?;
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(doc.scalar("a"), Some(&Scalar::from("3")));
    Ok(())
}

#[test]
fn empty_section_is_kept() -> Result<(), Box<dyn std::error::Error>> {
    let doc = decode("[empty]\n", &lf())?;
    assert_eq!(doc.section("empty").map(|s| s.len()), Some(0));
    Ok(())
}

#[test]
fn empty_and_newline_only_inputs() -> Result<(), Box<dyn std::error::Error>> {
    assert!(decode("", &lf())?.is_empty());
    assert!(decode("\n\n\n", &lf())?.is_empty());
    assert!(decode("  \n\t\n", &lf())?.is_empty());
    Ok(())
}

#[test]
fn lines_are_trimmed_but_key_and_value_are_not() -> Result<(), Box<dyn std::error::Error>> {
    let doc = decode("  key = value  \n", &lf())?;
    assert_eq!(doc.scalar("key "), Some(&Scalar::from(" value")));
    Ok(())
}

#[test]
fn trimming_can_be_disabled() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        trim_lines: false,
        ..lf()
    };
    let doc = decode(" [S]\n ;x=1\n", &opts)?;
    assert_eq!(doc.scalar(" [S]"), Some(&Scalar::Bool(true)));
    assert_eq!(doc.scalar(" ;x"), Some(&Scalar::from("1")));
    Ok(())
}

#[test]
fn custom_section_identifiers() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        section_open_identifier: "<".into(),
        section_close_identifier: ">".into(),
        ..lf()
    };
    let doc = decode("<net>\nport=80\n[not]\n", &opts)?;
    assert_eq!(str_at(&doc, "net", "port"), Some("80"));
    assert_eq!(
        doc.section("net").and_then(|s| s.get("[not]")),
        Some(&Scalar::Bool(true))
    );
    Ok(())
}

#[test]
fn header_with_trailing_text_is_a_key() -> Result<(), Box<dyn std::error::Error>> {
    let doc = decode("[a] b=c\n", &lf())?;
    assert_eq!(doc.scalar("[a] b"), Some(&Scalar::from("c")));
    Ok(())
}

#[test]
fn decode_returns_fresh_documents() -> Result<(), Box<dyn std::error::Error>> {
    let opts = lf();
    let mut first = decode("a=1\n", &opts)?;
    first.insert("b", "2");
    let second = decode("a=1\n", &opts)?;
    assert_eq!(second.len(), 1);
    Ok(())
}

#[test]
fn slice_input_must_be_utf8() {
    let err = decode_from_slice(&[b'a', b'=', 0xff, 0xfe], &lf()).unwrap_err();
    assert!(matches!(err, Error::InvalidInputType { .. }));
    assert!(err.to_string().starts_with("expecting string but got"));
}

#[test]
fn reader_input() -> Result<(), Box<dyn std::error::Error>> {
    let doc = decode_from_reader(&b"[S]\nk=v\n"[..], &lf())?;
    assert_eq!(str_at(&doc, "S", "k"), Some("v"));
    Ok(())
}

#[test]
fn byte_order_mark_before_header() -> Result<(), Box<dyn std::error::Error>> {
    let doc = decode("\u{FEFF}[S]\nk=v\n", &lf())?;
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["S"]);
    assert_eq!(str_at(&doc, "S", "k"), Some("v"));
    Ok(())
}

#[test]
fn section_replaces_stray_key_of_same_name() -> Result<(), Box<dyn std::error::Error>> {
    let doc = decode("a=1\nb=2\n[a]\nk=v\n", &lf())?;
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(doc.scalar("a"), None);
    assert_eq!(doc.scalar("b"), Some(&Scalar::from("2")));
    let a = doc.section("a").ok_or("missing section a")?;
    assert_eq!(a.len(), 1);
    assert_eq!(a.get("k"), Some(&Scalar::from("v")));
    Ok(())
}
