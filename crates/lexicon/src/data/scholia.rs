use crate::models::AuthorRef::Contextual;
use crate::models::CorpusTables;
use crate::models::WorkCode::Code;

/// `schol.` on its own names no author: the scholia are catalogued under the
/// author they comment on, which is cited right after it.
pub const SCHOLIA: CorpusTables = CorpusTables {
    name: "scholia",
    authors: &[
        ("scholia in aeschylum", "urn:cts:greekLit:tlg5011"),
        ("scholia in aristophanem", "urn:cts:greekLit:tlg5014"),
        ("scholia in euripidem", "urn:cts:greekLit:tlg5023"),
        ("scholia in homerum", "urn:cts:greekLit:tlg5026"),
        ("scholia in pindarum", "urn:cts:greekLit:tlg5034"),
        ("scholia in platonem", "urn:cts:greekLit:tlg5035"),
        ("scholia in sophoclem", "urn:cts:greekLit:tlg5037"),
        ("scholia in thucydidem", "urn:cts:greekLit:tlg5039"),
    ],
    abbreviations: &[
        ("schol.", Contextual(commented_author)),
        ("sch.", Contextual(commented_author)),
        ("scholia", Contextual(commented_author)),
        ("σ", Contextual(commented_author)),
    ],
    works: &[
        ("scholia in homerum", &[("iliad", Code("tlg001")), ("odyssey", Code("tlg002"))]),
        (
            "scholia in sophoclem",
            &[
                ("trachiniae", Code("tlg001")),
                ("antigone", Code("tlg002")),
                ("ajax", Code("tlg003")),
                ("oedipus tyrannus", Code("tlg004")),
                ("electra", Code("tlg005")),
                ("philoctetes", Code("tlg006")),
                ("oedipus coloneus", Code("tlg007")),
            ],
        ),
        (
            "scholia in aristophanem",
            &[
                ("acharnians", Code("tlg001")),
                ("knights", Code("tlg002")),
                ("clouds", Code("tlg003")),
                ("wasps", Code("tlg004")),
                ("peace", Code("tlg005")),
                ("birds", Code("tlg006")),
                ("frogs", Code("tlg009")),
                ("plutus", Code("tlg011")),
            ],
        ),
        (
            "scholia in pindarum",
            &[
                ("olympia", Code("tlg001")),
                ("pythia", Code("tlg002")),
                ("nemea", Code("tlg003")),
                ("isthmea", Code("tlg004")),
            ],
        ),
    ],
    single_work_authors: &["scholia in platonem", "scholia in thucydidem"],
    codes_as_titles: false,
};

/// Scholia collection for the author named in `window` (`soph.`, `in hom.`).
fn commented_author(window: &str) -> Option<&'static str> {
    let author = window.strip_prefix("in ").unwrap_or(window);
    match author {
        "aesch." | "aeschylus" | "aeschylum" => Some("scholia in aeschylum"),
        "ar." | "aristoph." | "aristophanes" | "aristophanem" => Some("scholia in aristophanem"),
        "eur." | "euripides" | "euripidem" => Some("scholia in euripidem"),
        "hom." | "homer" | "homerum" => Some("scholia in homerum"),
        "pind." | "pindar" | "pindarum" => Some("scholia in pindarum"),
        "pl." | "plat." | "plato" | "platonem" => Some("scholia in platonem"),
        "soph." | "sophocles" | "sophoclem" => Some("scholia in sophoclem"),
        "thuc." | "thucydides" | "thucydidem" => Some("scholia in thucydidem"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("soph.", Some("scholia in sophoclem"))]
    #[case("in hom.", Some("scholia in homerum"))]
    #[case("aristophanem", Some("scholia in aristophanem"))]
    #[case("in", None)]
    #[case("soph. aj.", None)]
    fn commented_authors(#[case] window: &str, #[case] expected: Option<&str>) {
        assert_eq!(commented_author(window), expected);
    }
}
