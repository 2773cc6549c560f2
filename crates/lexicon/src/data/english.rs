use crate::models::AuthorRef::Exact;
use crate::models::CorpusTables;
use crate::models::WorkCode::Code;

/// Shakespeare's work codes double as the usual abbreviations of the plays,
/// hence `codes_as_titles`.
pub const ENGLISH: CorpusTables = CorpusTables {
    name: "english",
    authors: &[("shakespeare", "urn:cts:englishLit:shak"), ("milton", "urn:cts:englishLit:milt")],
    abbreviations: &[
        ("shakesp.", Exact("shakespeare")),
        ("shaksp.", Exact("shakespeare")),
        ("shak.", Exact("shakespeare")),
        ("shak", Exact("shakespeare")),
        ("milt.", Exact("milton")),
    ],
    works: &[
        ("milton", &[("paradise lost", Code("pl")), ("par. lost.", Code("pl"))]),
        (
            "shakespeare",
            &[
                ("all's well that ends well", Code("aww")),
                ("antony and cleopatra", Code("ant")),
                ("as you like it", Code("ayl")),
                ("the comedy of errors", Code("err")),
                ("coriolanus", Code("cor")),
                ("cymbeline", Code("cym")),
                ("edward iii", Code("edw")),
                ("hamlet", Code("ham")),
                ("julius caesar", Code("jc")),
                ("king henry iv. part i", Code("1h4")),
                ("king henry iv. part ii", Code("2h4")),
                ("king henry v", Code("h5")),
                ("king henry vi. part i.", Code("1h6")),
                ("king henry vi. part ii.", Code("2h6")),
                ("king henry vi. part iii.", Code("3h6")),
                ("king henry viii.", Code("h8")),
                ("king john", Code("jn")),
                ("king lear", Code("lr")),
                ("a lover's complaint", Code("lc")),
                ("love's labor's lost", Code("lll")),
                ("lear", Code("lr")),
                ("macbeth", Code("mac")),
                ("measure for measure", Code("mm")),
                ("the merchant of venice", Code("mv")),
                ("the merry wives of windsor", Code("wiv")),
                ("a midsummer night's dream", Code("mnd")),
                ("much ado about nothing", Code("ado")),
                ("othello", Code("oth")),
                ("the passionate pilgrim", Code("pp")),
                ("pericles prince of tyre", Code("per")),
                ("the phoenix and the turtle", Code("pht")),
                ("the rape of lucrece", Code("luc")),
                ("richard ii", Code("r2")),
                ("richard iii", Code("r3")),
                ("romeo and juliet", Code("rom")),
                ("sir thomas more", Code("stm")),
                ("sonnets", Code("son")),
                ("the taming of the shrew", Code("shr")),
                ("the tempest", Code("tmp")),
                ("timon of athens", Code("tim")),
                ("titus andronicus", Code("tit")),
                ("troilus and cressida", Code("tro")),
                ("twelfth night", Code("tn")),
                ("two gentlemen of verona", Code("tgv")),
                ("the two noble kinsmen", Code("tnk")),
                ("venus and adonis", Code("ven")),
                ("a winter's tale", Code("wt")),
            ],
        ),
    ],
    single_work_authors: &[],
    codes_as_titles: true,
};
