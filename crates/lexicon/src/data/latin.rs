use crate::models::AuthorRef::Exact;
use crate::models::CorpusTables;
use crate::models::WorkCode::Code;

pub const LATIN: CorpusTables = CorpusTables {
    name: "latin",
    authors: &[
        ("plautus", "urn:cts:latinLit:phi0119"),
        ("vergil", "urn:cts:latinLit:phi0690"),
        ("horace", "urn:cts:latinLit:phi0893"),
        ("ovid", "urn:cts:latinLit:phi0959"),
        ("tacitus", "urn:cts:latinLit:phi1351"),
    ],
    abbreviations: &[
        ("plaut.", Exact("plautus")),
        ("tac.", Exact("tacitus")),
        ("verg.", Exact("vergil")),
        ("virg.", Exact("vergil")),
        ("virgil", Exact("vergil")),
        ("hor.", Exact("horace")),
        ("ov.", Exact("ovid")),
    ],
    works: &[
        ("plautus", &[("trinummus", Code("phi019"))]),
        ("tacitus", &[("agricola", Code("phi001")), ("germania", Code("phi002"))]),
        (
            "vergil",
            &[
                ("eclogues", Code("phi001")),
                ("georgics", Code("phi002")),
                ("aeneid", Code("phi003")),
            ],
        ),
        (
            "horace",
            &[
                ("odes", Code("phi001")),
                ("carmina", Code("phi001")),
                ("epodes", Code("phi002")),
                ("satires", Code("phi004")),
                ("sermones", Code("phi004")),
                ("epistles", Code("phi005")),
                ("ars poetica", Code("phi006")),
            ],
        ),
        (
            "ovid",
            &[
                ("amores", Code("phi001")),
                ("heroides", Code("phi002")),
                ("metamorphoses", Code("phi006")),
                ("fasti", Code("phi007")),
                ("tristia", Code("phi008")),
            ],
        ),
    ],
    single_work_authors: &[],
    codes_as_titles: false,
};
