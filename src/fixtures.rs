#[cfg(test)]
pub mod test {
    use crate::document::Document;

    /// Well-formed input with comments, two sections and references.
    pub const SERVER_INI: &str = "\
; Sample server configuration
[server]
host = example.org
port = 8080
debug = false
url = http://${host}:${port}/

[database]
; connection settings
url = postgres://localhost/app
backup = ${url}_backup
pool_size = 5
";

    pub fn parsed(text: &str) -> Document {
        let mut doc = Document::new();
        doc.parse_str(text);
        doc
    }

    #[test]
    fn server_fixture_is_well_formed() {
        let doc = parsed(SERVER_INI);
        assert!(doc.is_well_formed());
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.section("server").unwrap().len(), 4);
        assert_eq!(doc.section("database").unwrap().len(), 3);
    }
}
