use confini::{Document, Options, Scalar, Section, decode, encode, encode_to_writer};

fn lf() -> Options {
    Options {
        line_ending: "\n".into(),
        ..Default::default()
    }
}

fn section_a() -> Document {
    let mut a = Section::new();
    a.insert("a".into(), Scalar::from(1));
    [("SectionA", a)].into_iter().collect()
}

#[test]
fn default_options_use_crlf() -> Result<(), Box<dyn std::error::Error>> {
    let doc: Document = [("a", 1)].into_iter().collect();
    assert_eq!(encode(&doc, &Options::default())?, "a=1\r\n");
    Ok(())
}

#[test]
fn empty_document_encodes_to_empty_string() -> Result<(), Box<dyn std::error::Error>> {
    assert_eq!(encode(&Document::new(), &Options::default())?, "");
    Ok(())
}

#[test]
fn stray_keys_come_before_sections() -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = Document::new();
    doc.insert_into("First", "x", "1");
    doc.insert("stray", "foo");
    doc.insert_into("Second", "y", "2");
    doc.insert("other", "bar");
    assert_eq!(
        encode(&doc, &lf())?,
        "stray=foo\nother=bar\n[First]\nx=1\n\n[Second]\ny=2\n"
    );
    Ok(())
}

#[test]
fn stray_key_survives_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let mut doc = section_a();
    doc.insert("stray", "foo");
    let decoded = decode(&encode(&doc, &lf())?, &lf())?;
    assert_eq!(decoded.scalar("stray"), Some(&Scalar::from("foo")));
    Ok(())
}

#[test]
fn quoted_section_names() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        quote_attributes: true,
        ..lf()
    };
    assert_eq!(encode(&section_a(), &opts)?, "[\"SectionA\"]\na=1\n");
    Ok(())
}

#[test]
fn quoted_keys() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        quote_keys: true,
        ..lf()
    };
    assert_eq!(encode(&section_a(), &opts)?, "[SectionA]\n\"a\"=1\n");
    Ok(())
}

#[test]
fn quoted_values() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        quote_values: true,
        ..lf()
    };
    assert_eq!(encode(&section_a(), &opts)?, "[SectionA]\na=\"1\"\n");
    Ok(())
}

#[test]
fn everything_quoted() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        quote_attributes: true,
        quote_keys: true,
        quote_values: true,
        ..lf()
    };
    assert_eq!(encode(&section_a(), &opts)?, "[\"SectionA\"]\n\"a\"=\"1\"\n");
    Ok(())
}

#[test]
fn quoting_does_not_check_existing_quotes() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        quote_values: true,
        ..lf()
    };
    let doc: Document = [("k", "\"v\"")].into_iter().collect();
    assert_eq!(encode(&doc, &opts)?, "k=\"\"v\"\"\n");
    Ok(())
}

#[test]
fn booleans_are_written_with_delimiter() -> Result<(), Box<dyn std::error::Error>> {
    let doc: Document = [("flag", Scalar::Bool(true)), ("off", Scalar::Bool(false))]
        .into_iter()
        .collect();
    assert_eq!(encode(&doc, &lf())?, "flag=true\noff=false\n");
    Ok(())
}

#[test]
fn quoted_boolean_values() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        quote_values: true,
        ..lf()
    };
    let doc: Document = [("flag", Scalar::Bool(true))].into_iter().collect();
    assert_eq!(encode(&doc, &opts)?, "flag=\"true\"\n");
    Ok(())
}

#[test]
fn valueless_key_becomes_text_after_one_cycle() -> Result<(), Box<dyn std::error::Error>> {
    let decoded = decode("[S]\nflag\n", &lf())?;
    let encoded = encode(&decoded, &lf())?;
    assert_eq!(encoded, "[S]\nflag=true\n");
    let again = decode(&encoded, &lf())?;
    assert_eq!(again.section("S").and_then(|s| s.get("flag")), Some(&Scalar::from("true")));
    assert_eq!(encode(&again, &lf())?, encoded);
    Ok(())
}

#[test]
fn custom_identifiers() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        section_open_identifier: "<".into(),
        section_close_identifier: ">".into(),
        assign_identifier: ": ".into(),
        ..lf()
    };
    let mut doc = Document::new();
    doc.insert_into("net", "port", "80");
    assert_eq!(encode(&doc, &opts)?, "<net>\nport: 80\n");
    Ok(())
}

#[test]
fn detection_normalizes_configured_ending() -> Result<(), Box<dyn std::error::Error>> {
    let opts = Options {
        detect_line_ending: true,
        line_ending: "\r".into(),
        ..Default::default()
    };
    let doc: Document = [("a", "1"), ("b", "2")].into_iter().collect();
    assert_eq!(encode(&doc, &opts)?, "a=1\rb=2\r");
    Ok(())
}

#[test]
fn writer_output_matches_string() -> Result<(), Box<dyn std::error::Error>> {
    let doc = section_a();
    let mut buf = Vec::new();
    encode_to_writer(&mut buf, &doc, &lf())?;
    assert_eq!(String::from_utf8(buf)?, encode(&doc, &lf())?);
    Ok(())
}
