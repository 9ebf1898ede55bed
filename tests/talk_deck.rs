//! End-to-end tests: build the full deck, write it to disk, and inspect the
//! resulting archive the way a presentation reader would.

use quick_xml::Reader;
use quick_xml::events::Event;
use std::io::Read as IoRead;
use talkdeck::deck::content::build_deck;

fn deck_bytes() -> Vec<u8> {
    build_deck().to_bytes().expect("deck should serialize")
}

fn open_archive(bytes: Vec<u8>) -> zip::ZipArchive<std::io::Cursor<Vec<u8>>> {
    zip::ZipArchive::new(std::io::Cursor::new(bytes)).expect("output should be a valid ZIP")
}

fn read_member(archive: &mut zip::ZipArchive<std::io::Cursor<Vec<u8>>>, name: &str) -> String {
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("archive should contain {}", name))
        .read_to_string(&mut content)
        .expect("member should be UTF-8");
    content
}

/// Collect the character content of all <a:t> elements in a slide part.
///
/// Entity references arrive as separate GeneralRef events, so runs are
/// accumulated until the closing tag.
fn text_runs(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut runs = Vec::new();
    let mut in_text = false;
    let mut current = String::new();

    loop {
        match reader.read_event().expect("slide XML should be well-formed") {
            Event::Start(e) if e.name().as_ref() == b"a:t" => {
                in_text = true;
                current.clear();
            },
            Event::End(e) if e.name().as_ref() == b"a:t" => {
                in_text = false;
                runs.push(std::mem::take(&mut current));
            },
            Event::Text(t) if in_text => {
                current.push_str(std::str::from_utf8(t.as_ref()).expect("text should be UTF-8"));
            },
            Event::GeneralRef(r) if in_text => {
                current.push(match &*r {
                    b"amp" => '&',
                    b"lt" => '<',
                    b"gt" => '>',
                    b"quot" => '"',
                    b"apos" => '\'',
                    other => panic!("unexpected entity reference: {:?}", other),
                });
            },
            Event::Eof => break,
            _ => {},
        }
    }

    runs
}

#[test]
fn deck_contains_28_slides_and_notes() {
    let mut archive = open_archive(deck_bytes());

    let names: Vec<String> = archive.file_names().map(String::from).collect();
    let slides = names
        .iter()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count();
    let notes = names
        .iter()
        .filter(|n| n.starts_with("ppt/notesSlides/notesSlide") && n.ends_with(".xml"))
        .count();

    assert_eq!(slides, 28);
    assert_eq!(notes, 28);

    // Structural parts
    for name in [
        "[Content_Types].xml",
        "_rels/.rels",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/notesMasters/notesMaster1.xml",
        "ppt/theme/theme1.xml",
        "docProps/core.xml",
        "docProps/app.xml",
    ] {
        assert!(names.contains(&name.to_string()), "missing {}", name);
    }

    let content_types = read_member(&mut archive, "[Content_Types].xml");
    assert!(content_types.contains("presentationml.slide+xml"));
    assert!(content_types.contains("presentationml.notesSlide+xml"));
}

#[test]
fn title_slide_carries_deck_opening() {
    let mut archive = open_archive(deck_bytes());
    let slide1 = read_member(&mut archive, "ppt/slides/slide1.xml");

    let runs = text_runs(&slide1);
    assert!(runs.iter().any(|t| t == "From Script Kiddie to Spotify"));
    assert!(runs.iter().any(|t| t == "A 30-Year Journey"));
    assert!(runs.iter().any(|t| t == "PyCon Namibia 2026"));

    // Dark background and green accent
    assert!(slide1.contains(r#"<a:srgbClr val="191919"/>"#));
    assert!(slide1.contains(r#"<a:srgbClr val="1DB954"/>"#));
}

#[test]
fn content_slide_has_bullets_with_spacing() {
    let mut archive = open_archive(deck_bytes());
    // Slide 2 is "The Record Store"
    let slide2 = read_member(&mut archive, "ppt/slides/slide2.xml");

    let runs = text_runs(&slide2);
    assert!(runs.iter().any(|t| t == "The Record Store"));
    assert!(
        runs.iter()
            .any(|t| t == "My parents owned a record store in the Netherlands")
    );

    // Bullets after the first get 12pt space-before
    assert!(slide2.contains(r#"<a:spcPts val="1200"/>"#));
    // First bullet has none, so there are exactly bullets-1 occurrences
    assert_eq!(slide2.matches(r#"<a:spcPts val="1200"/>"#).count(), 2);
}

#[test]
fn notes_slides_reference_their_slide() {
    let mut archive = open_archive(deck_bytes());

    let notes1 = read_member(&mut archive, "ppt/notesSlides/notesSlide1.xml");
    assert!(text_runs(&notes1).join(" ").contains("I'm Gijs Molenaar"));

    let rels = read_member(&mut archive, "ppt/notesSlides/_rels/notesSlide1.xml.rels");
    assert!(rels.contains(r#"Target="../slides/slide1.xml""#));
    assert!(rels.contains(r#"Target="../notesMasters/notesMaster1.xml""#));
}

#[test]
fn presentation_lists_slides_in_order() {
    let mut archive = open_archive(deck_bytes());
    let pres = read_member(&mut archive, "ppt/presentation.xml");
    let rels = read_member(&mut archive, "ppt/_rels/presentation.xml.rels");

    // 16:9 slide size, 10 x 5.625 inches
    assert!(pres.contains(r#"<p:sldSz cx="9144000" cy="5143500"/>"#));

    // Slide IDs run 256..=283 and each references a registered rId
    assert!(pres.contains(r#"<p:sldId id="256""#));
    assert!(pres.contains(r#"<p:sldId id="283""#));
    for n in 1..=28 {
        assert!(rels.contains(&format!(r#"Target="slides/slide{}.xml""#, n)));
    }
}

#[test]
fn saves_to_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("talk.pptx");

    let package = build_deck();
    package.save(&path).expect("save should succeed");

    let bytes = std::fs::read(&path).expect("file should exist");
    assert_eq!(&bytes[0..2], b"PK");

    let mut archive = open_archive(bytes);
    let app = read_member(&mut archive, "docProps/app.xml");
    assert!(app.contains("<Slides>28</Slides>"));
}
