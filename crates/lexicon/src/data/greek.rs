use crate::models::AuthorRef::Exact;
use crate::models::CorpusTables;
use crate::models::WorkCode::{Code, Collection};

pub const GREEK: CorpusTables = CorpusTables {
    name: "greek",
    authors: &[
        ("thucydides", "urn:cts:greekLit:tlg0003"),
        ("diogenes", "urn:cts:greekLit:tlg0004"),
        ("theocritus", "urn:cts:greekLit:tlg0005"),
        ("euripides", "urn:cts:greekLit:tlg0006"),
        ("plutarch", "urn:cts:greekLit:tlg0007"),
        ("athenaeus", "urn:cts:greekLit:tlg0008"),
        ("isocrates", "urn:cts:greekLit:tlg0010"),
        ("sophocles", "urn:cts:greekLit:tlg0011"),
        ("homer", "urn:cts:greekLit:tlg0012"),
        ("homeric hymns", "urn:cts:greekLit:tlg0013"),
        ("demosthenes", "urn:cts:greekLit:tlg0014"),
        ("herodotus", "urn:cts:greekLit:tlg0016"),
        ("isaeus", "urn:cts:greekLit:tlg0017"),
        ("aristophanes", "urn:cts:greekLit:tlg0019"),
        ("hesiod", "urn:cts:greekLit:tlg0020"),
        ("aeschines", "urn:cts:greekLit:tlg0026"),
        ("andocides", "urn:cts:greekLit:tlg0027"),
        ("antiphon", "urn:cts:greekLit:tlg0028"),
        ("xenophon", "urn:cts:greekLit:tlg0032"),
        ("pindar", "urn:cts:greekLit:tlg0033"),
        ("bion", "urn:cts:greekLit:tlg0036"),
        ("plato", "urn:cts:greekLit:tlg0059"),
        ("lucian", "urn:cts:greekLit:tlg0062"),
        ("dionysius", "urn:cts:greekLit:tlg0081"),
        ("dionysius periegetes", "urn:cts:greekLit:tlg0084"),
        ("aeschylus", "urn:cts:greekLit:tlg0085"),
        ("aristotle", "urn:cts:greekLit:tlg0086"),
        ("strabo", "urn:cts:greekLit:tlg0099"),
        ("tyrtaeus", "urn:cts:greekLit:tlg0266"),
        ("pausanias", "urn:cts:greekLit:tlg0525"),
        ("callimachus", "urn:cts:greekLit:tlg0533"),
        ("lysias", "urn:cts:greekLit:tlg0540"),
        ("menander", "urn:cts:greekLit:tlg0541"),
        ("polybius", "urn:cts:greekLit:tlg0543"),
        ("sextus", "urn:cts:greekLit:tlg0544"),
        ("dio", "urn:cts:greekLit:tlg0612"),
        ("hippocrates", "urn:cts:greekLit:tlg0627"),
        ("eustathius", "urn:cts:greekLit:tlg4083"),
        ("hesychius", "urn:cts:greekLit:tlg4085"),
    ],
    abbreviations: &[
        ("aesch.", Exact("aeschylus")),
        ("aeschin.", Exact("aeschines")),
        ("andoc.", Exact("andocides")),
        ("antiph.", Exact("antiphon")),
        ("aristoph.", Exact("aristophanes")),
        ("ar.", Exact("aristophanes")),
        ("aristot.", Exact("aristotle")),
        ("arist.", Exact("aristotle")),
        ("athen.", Exact("athenaeus")),
        ("callim.", Exact("callimachus")),
        ("dem.", Exact("demosthenes")),
        ("dio chrys.", Exact("dio")),
        ("dio chrysostom", Exact("dio")),
        ("diog. laert.", Exact("diogenes")),
        ("d.l.", Exact("diogenes")),
        ("dion. hal.", Exact("dionysius")),
        ("dionysius of halicarnassus", Exact("dionysius")),
        ("dionys. periegetes", Exact("dionysius periegetes")),
        ("dionys. per.", Exact("dionysius periegetes")),
        ("dion. per.", Exact("dionysius periegetes")),
        ("eur.", Exact("euripides")),
        ("eustath.", Exact("eustathius")),
        ("hdt.", Exact("herodotus")),
        ("hes.", Exact("hesiod")),
        ("hesych.", Exact("hesychius")),
        ("hh", Exact("homeric hymns")),
        ("h.h.", Exact("homeric hymns")),
        ("h. hymn.", Exact("homeric hymns")),
        ("hippoc.", Exact("hippocrates")),
        ("hom.", Exact("homer")),
        ("isae.", Exact("isaeus")),
        ("isoc.", Exact("isocrates")),
        ("luc.", Exact("lucian")),
        ("lys.", Exact("lysias")),
        ("menand.", Exact("menander")),
        ("paus.", Exact("pausanias")),
        ("pind.", Exact("pindar")),
        ("plat.", Exact("plato")),
        ("pl.", Exact("plato")),
        ("polyb.", Exact("polybius")),
        ("plut.", Exact("plutarch")),
        ("sext. emp.", Exact("sextus")),
        ("sextus empiricus", Exact("sextus")),
        ("sext.", Exact("sextus")),
        ("soph.", Exact("sophocles")),
        ("strab.", Exact("strabo")),
        ("theocr.", Exact("theocritus")),
        ("thuc.", Exact("thucydides")),
        ("tyrt.", Exact("tyrtaeus")),
        ("xen.", Exact("xenophon")),
    ],
    works: &[
        (
            "aeschines",
            &[
                ("against timarchus", Code("tlg001")),
                ("on the embassy", Code("tlg002")),
                ("against ctesiphon", Code("tlg003")),
                ("epistulae", Code("tlg004")),
            ],
        ),
        (
            "aeschylus",
            &[
                ("suppliant maidens", Code("tlg001")),
                ("persians", Code("tlg002")),
                ("prometheus bound", Code("tlg003")),
                ("seven against thebes", Code("tlg004")),
                ("agamemnon", Code("tlg005")),
                ("choephoroi", Code("tlg006")),
                ("libation bearers", Code("tlg006")),
                ("eumenides", Code("tlg007")),
                ("fragmenta", Code("tlg008")),
                ("fragmentum", Code("tlg009")),
                ("epigrammata", Code("tlg010")),
            ],
        ),
        ("andocides", &[("de mysteriis", Code("tlg001"))]),
        (
            "antiphon",
            &[
                ("against the stepmother for poisoning", Code("tlg001")),
                ("first tetralogy", Code("tlg002")),
                ("second tetralogy", Code("tlg003")),
                ("third tetralogy", Code("tlg004")),
                ("on the murder of herodes", Code("tlg005")),
                ("on the choreutes", Code("tlg006")),
                ("fragmenta", Code("tlg007")),
            ],
        ),
        (
            "aristophanes",
            &[
                ("acharnians", Code("tlg001")),
                ("knights", Code("tlg002")),
                ("clouds", Code("tlg003")),
                ("wasps", Code("tlg004")),
                ("peace", Code("tlg005")),
                ("birds", Code("tlg006")),
                ("lysistrata", Code("tlg007")),
                ("thesmophoriazusae", Code("tlg008")),
                ("frogs", Code("tlg009")),
                ("ecclesiazusae", Code("tlg010")),
                ("plutus", Code("tlg011")),
                ("fragmenta", Code("tlg013")),
                ("aristophanis cantica", Code("tlg030")),
            ],
        ),
        (
            "aristotle",
            &[
                ("on the soul", Code("tlg002")),
                ("soul", Code("tlg002")),
                ("de anima", Code("tlg002")),
                ("de an.", Code("tlg002")),
                ("nicomachean ethics", Code("tlg010")),
                ("nic. eth.", Code("tlg010")),
                ("historia animalium", Code("tlg014")),
                ("hist. an.", Code("tlg014")),
                ("meteorologica", Code("tlg026")),
                ("rhetoric", Code("tlg038")),
                ("topica", Code("tlg044")),
            ],
        ),
        (
            "bion",
            &[
                ("epitaphius adonis", Code("tlg001")),
                ("epithalamium achillis et deidameiae", Code("tlg002")),
                ("fragmenta", Code("tlg003")),
            ],
        ),
        (
            "callimachus",
            &[
                ("epigrams", Code("tlg003")),
                ("aetia", Code("tlg006")),
                ("iambi", Code("tlg007")),
                ("hecale", Code("tlg009")),
                ("epigrammata fragmenta", Code("tlg011")),
                ("hymn to zeus", Code("tlg015")),
                ("zeus", Code("tlg015")),
                ("hymn to apollo", Code("tlg016")),
                ("apollo", Code("tlg016")),
                ("hymn to artemis", Code("tlg017")),
                ("artemis", Code("tlg017")),
                ("hymn to delos", Code("tlg018")),
                ("delos", Code("tlg018")),
                ("hymn to athena", Code("tlg019")),
                ("athena", Code("tlg019")),
                ("hymn to demeter", Code("tlg020")),
                ("demeter", Code("tlg020")),
            ],
        ),
        (
            "demosthenes",
            &[
                ("orationes", Collection { stem: "tlg", first: 1, last: 61 }),
                ("on the false embassy", Code("tlg019")),
                ("on the crown", Code("tlg018")),
                ("philippic 1", Code("tlg004")),
            ],
        ),
        (
            "dionysius",
            &[
                ("antiquitates romanae", Code("tlg001")),
                ("de antiquis oratoribus", Code("tlg002")),
            ],
        ),
        (
            "hesiod",
            &[
                ("theogony", Code("tlg001")),
                ("works and days", Code("tlg002")),
                ("shield of heracles", Code("tlg003")),
                ("fragmenta", Code("tlg004")),
                ("testimonia", Code("tlg005")),
                ("fragmenta astronomica", Code("tlg006")),
            ],
        ),
        (
            "hippocrates",
            &[
                ("de prisca medicina", Code("tlg001")),
                ("de aere aquis et locis", Code("tlg002")),
                ("prognosticon", Code("tlg003")),
                ("de diaeta in morbis acutis", Code("tlg004")),
                ("de diaeta acutorum", Code("tlg005")),
                ("de morbis popularibus", Code("tlg006")),
                ("de capitis vulneribus", Code("tlg007")),
                ("de officina medici", Code("tlg008")),
                ("de fracturis", Code("tlg009")),
                ("de articulis", Code("tlg010")),
                ("vectiarius", Code("tlg011")),
                ("aphorismi", Code("tlg012")),
                ("jusjurandum", Code("tlg013")),
                ("lex", Code("tlg014")),
                ("de morbo sacro", Code("tlg027")),
                ("de ulceribus", Code("tlg028")),
                ("de haemorrhoidibus", Code("tlg029")),
                ("de fistulis", Code("tlg030")),
                ("de alimento", Code("tlg046")),
                ("praeceptiones", Code("tlg051")),
                ("epistulae", Code("tlg055")),
            ],
        ),
        (
            "homer",
            &[
                ("iliad", Code("tlg001")),
                ("odyssey", Code("tlg002")),
                ("epigrammata", Code("tlg003")),
            ],
        ),
        (
            "homeric hymns",
            &[
                ("hymn", Collection { stem: "tlg", first: 1, last: 33 }),
                ("hymns", Collection { stem: "tlg", first: 1, last: 33 }),
                ("hymn 1 to dionysus", Code("tlg001")),
                ("dionysus", Code("tlg001")),
                ("hymn 2 to demeter", Code("tlg002")),
                ("demeter", Code("tlg002")),
                ("hymn 3 to apollo", Code("tlg003")),
                ("apollo", Code("tlg003")),
                ("hymn 4 to hermes", Code("tlg004")),
                ("hermes", Code("tlg004")),
                ("hymn 5 to aphrodite", Code("tlg005")),
                ("hymn 6 to aphrodite", Code("tlg006")),
                ("hymn 7 to dionysus", Code("tlg007")),
                ("hymn 8 to ares", Code("tlg008")),
                ("hymn 9 to artemis", Code("tlg009")),
                ("hymn 10 to aphrodite", Code("tlg010")),
                ("hymn 11 to athena", Code("tlg011")),
                ("athena", Code("tlg011")),
                ("hymn 12 to hera", Code("tlg012")),
                ("hera", Code("tlg012")),
                ("hymn 13 to demeter", Code("tlg013")),
                ("hymn 14 to the mother of the gods", Code("tlg014")),
                ("mother of the gods", Code("tlg014")),
                ("hymn 15 to heracles", Code("tlg015")),
                ("heracles", Code("tlg015")),
                ("hymn 16 to asclepius", Code("tlg016")),
                ("asclepius", Code("tlg016")),
                ("hymn 17 to the dioscuri", Code("tlg017")),
                ("dioscuri", Code("tlg017")),
                ("hymn 18 to hermes", Code("tlg018")),
                ("hymn 19 to pan", Code("tlg019")),
                ("pan", Code("tlg019")),
                ("hymn 20 to hephaestus", Code("tlg020")),
                ("hephaestus", Code("tlg020")),
                ("hymn 21 to apollo", Code("tlg021")),
                ("hymn 22 to poseidon", Code("tlg022")),
                ("poseidon", Code("tlg022")),
                ("hymn 23 to zeus", Code("tlg023")),
                ("zeus", Code("tlg023")),
                ("hymn 24 to hestia", Code("tlg024")),
                ("hymn 25 to the muses and apollo", Code("tlg025")),
                ("hymn 26 to dionysus", Code("tlg026")),
                ("hymn 27 to artemis", Code("tlg027")),
                ("hymn 28 to athena", Code("tlg028")),
                ("hymn 29 to hestia", Code("tlg029")),
                ("hymn 30 to earth", Code("tlg030")),
                ("hymn 31 to helios", Code("tlg031")),
                ("helios", Code("tlg031")),
                ("hymn 32 to selene", Code("tlg032")),
                ("selene", Code("tlg032")),
                ("hymn 33 to the dioscuri", Code("tlg033")),
            ],
        ),
        (
            "euripides",
            &[
                ("cyclops", Code("tlg001")),
                ("alcestis", Code("tlg002")),
                ("medea", Code("tlg003")),
                ("heraclidae", Code("tlg004")),
                ("heraclid.", Code("tlg004")),
                ("hippolytus", Code("tlg005")),
                ("andromache", Code("tlg006")),
                ("hecuba", Code("tlg007")),
                ("suppliants", Code("tlg008")),
                ("supplices", Code("tlg008")),
                ("heracles", Code("tlg009")),
                ("ion", Code("tlg010")),
                ("trojan women", Code("tlg011")),
                ("troades", Code("tlg011")),
                ("troiades", Code("tlg011")),
                ("electra", Code("tlg012")),
                ("iphigeneia in tauris", Code("tlg013")),
                ("helen", Code("tlg014")),
                ("phoenician women", Code("tlg015")),
                ("orestes", Code("tlg016")),
                ("bacchae", Code("tlg017")),
                ("iphigeneia in aulis", Code("tlg018")),
                ("rhesus", Code("tlg019")),
                ("epigrammata", Code("tlg031")),
            ],
        ),
        ("isaeus", &[("apollodorus", Code("tlg007"))]),
        (
            "isocrates",
            &[
                ("letters", Collection { stem: "tlg", first: 20, last: 28 }),
                ("letter", Collection { stem: "tlg", first: 20, last: 28 }),
                ("ep.", Collection { stem: "tlg", first: 20, last: 28 }),
                ("helen", Code("tlg010")),
                ("panegyricus", Code("tlg004")),
                ("ad alexandrum", Code("tlg024")),
                ("ad timotheum", Code("tlg026")),
            ],
        ),
        (
            "lucian",
            &[
                ("hippias", Code("tlg002")),
                ("symposium", Code("tlg015")),
                ("iuppiter tragoedus", Code("tlg018")),
                ("juppiter tragoedus", Code("tlg018")),
                ("iupp. trag.", Code("tlg018")),
                ("jupp. trag.", Code("tlg018")),
                ("icaromenippus", Code("tlg021")),
                ("dialogi mortuorum", Code("tlg066")),
                ("dial. mort.", Code("tlg066")),
                ("dialogi deorum", Code("tlg068")),
                ("dial. deor.", Code("tlg068")),
                ("dial. d.", Code("tlg068")),
            ],
        ),
        (
            "lysias",
            &[
                ("orationes", Collection { stem: "tlg", first: 1, last: 35 }),
                ("against eratosthenes", Code("tlg012")),
            ],
        ),
        (
            "menander",
            &[
                ("dyscolus", Code("tlg007")),
                ("sententiae", Code("tlg024")),
                ("samia", Code("tlg029")),
                ("sententiae e codicibus byzantinis", Code("tlg042")),
            ],
        ),
        (
            "pindar",
            &[
                ("olympia", Code("tlg001")),
                ("pythia", Code("tlg002")),
                ("nemea", Code("tlg003")),
                ("isthmea", Code("tlg004")),
                ("fragmenta", Code("tlg005")),
            ],
        ),
        (
            "plato",
            &[
                ("euthyphro", Code("tlg001")),
                ("euthyph.", Code("tlg001")),
                ("apology", Code("tlg002")),
                ("crito", Code("tlg003")),
                ("phaedo", Code("tlg004")),
                ("cratylus", Code("tlg005")),
                ("theaetetus", Code("tlg006")),
                ("sophist", Code("tlg007")),
                ("statesman", Code("tlg008")),
                ("parmenides", Code("tlg009")),
                ("philebus", Code("tlg010")),
                ("symposium", Code("tlg011")),
                ("phaedrus", Code("tlg012")),
                ("alcibiades 1", Code("tlg013")),
                ("alc. 1", Code("tlg013")),
                ("alcibiades 2", Code("tlg014")),
                ("alc. 2", Code("tlg014")),
                ("hipparchus", Code("tlg015")),
                ("lovers", Code("tlg016")),
                ("theages", Code("tlg017")),
                ("charmides", Code("tlg018")),
                ("laches", Code("tlg019")),
                ("lysis", Code("tlg020")),
                ("euthydemus", Code("tlg021")),
                ("protagoras", Code("tlg022")),
                ("gorgias", Code("tlg023")),
                ("meno", Code("tlg024")),
                ("greater hippias", Code("tlg025")),
                ("hippias major", Code("tlg025")),
                ("hipp. maj.", Code("tlg025")),
                ("lesser hippias", Code("tlg026")),
                ("hippias minor", Code("tlg026")),
                ("hipp. min.", Code("tlg026")),
                ("ion", Code("tlg027")),
                ("menexenus", Code("tlg028")),
                ("cleitophon", Code("tlg029")),
                ("republic", Code("tlg030")),
                ("timaeus", Code("tlg031")),
                ("critias", Code("tlg032")),
                ("minos", Code("tlg033")),
                ("laws", Code("tlg034")),
                ("epinomis", Code("tlg035")),
                ("letters", Code("tlg036")),
                ("definitiones", Code("tlg037")),
                ("epigrammata", Code("tlg039")),
            ],
        ),
        (
            "plutarch",
            &[
                ("theseus", Code("tlg001")),
                ("pericles", Code("tlg012")),
                ("aristeides", Code("tlg024")),
                ("alexander", Code("tlg047")),
                ("tiberius gracchus", Code("tlg052")),
                ("tib. gracch.", Code("tlg052")),
                ("demosthenes", Code("tlg054")),
                ("dem.", Code("tlg054")),
                ("artaxerxes", Code("tlg064")),
            ],
        ),
        (
            "sextus",
            &[
                ("pyrrhoniae hypotyposes", Code("tlg001")),
                ("adversus mathematicos", Code("tlg002")),
                ("adv. math.", Code("tlg002")),
            ],
        ),
        (
            "sophocles",
            &[
                ("trachiniae", Code("tlg001")),
                ("antigone", Code("tlg002")),
                ("ajax", Code("tlg003")),
                ("oedipus tyrannus", Code("tlg004")),
                ("oedipus rex", Code("tlg004")),
                ("electra", Code("tlg005")),
                ("philoctetes", Code("tlg006")),
                ("oedipus at colonus", Code("tlg007")),
                ("oedipus coloneus", Code("tlg007")),
                ("ichneutae", Code("tlg008")),
            ],
        ),
        (
            "theocritus",
            &[("idylls", Code("tlg001")), ("epigrams", Code("tlg002"))],
        ),
        (
            "thucydides",
            &[
                ("history of the peloponnesian war", Code("tlg001")),
                ("epigramma", Code("tlg002")),
            ],
        ),
        (
            "xenophon",
            &[
                ("hellenica", Code("tlg001")),
                ("memorabilia", Code("tlg002")),
                ("economics", Code("tlg003")),
                ("symposium", Code("tlg004")),
                ("apology", Code("tlg005")),
                ("anabasis", Code("tlg006")),
                ("cyropaedia", Code("tlg007")),
                ("hiero", Code("tlg008")),
                ("agesilaus", Code("tlg009")),
                ("constitution of the lacedaimonians", Code("tlg010")),
                ("ways and means", Code("tlg011")),
                ("on the cavalry commander", Code("tlg012")),
                ("on the art of horsemanship", Code("tlg013")),
                ("on hunting", Code("tlg014")),
                ("constitution of the athenians", Code("tlg015")),
            ],
        ),
    ],
    single_work_authors: &[
        "athenaeus",
        "dio",
        "diogenes",
        "dionysius periegetes",
        "eustathius",
        "herodotus",
        "hesychius",
        "pausanias",
        "polybius",
        "strabo",
        "tyrtaeus",
    ],
    codes_as_titles: false,
};
