// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_html_content(paragraphs: usize) -> String {
    let base = concat!(
        "<p>See the <a href=\"/docs/intro\">introduction</a>, ",
        "the <a href=\"https://www.rust-lang.org\" rel=\"nofollow\">Rust site</a> ",
        "or <a href=\"mailto:team@example.com\">mail the team</a>.</p>\n",
        "<p><strong>Jump</strong> to <a href=\"#section-2\">section two</a>.</p>\n",
    );
    base.repeat(paragraphs)
}
