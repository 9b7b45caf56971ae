//! What the four prisms say.

use crate::registry::{Action, Command};

#[derive(Clone, Debug)]
pub struct PrismContent {
    pub title: String,
    pub sides: Vec<SideContent>,
}

#[derive(Clone, Debug, Default)]
pub struct SideContent {
    pub heading: String,
    pub body: Vec<String>,
    pub picture: Option<PictureContent>,
}

#[derive(Clone, Debug)]
pub struct PictureContent {
    /// Texture asset key.
    pub texture: &'static str,
    pub action: Action,
}

pub const FUN_FACT_URL: &str = "https://uselessfacts.jsph.pl/api/v2/facts/random";

/// Image file behind each texture key, relative to the asset directory.
pub const TEXTURE_FILES: &[(&str, &str)] = &[
    ("4peaks", "4peaks.jpg"),
    ("chess", "chess.png"),
    ("fms", "fms.png"),
    ("mm", "mm.png"),
    ("ghp", "ghp.png"),
    ("fun-fact", "fun-fact.png"),
    ("wood", "wood.png"),
];

pub fn texture_file(key: &str) -> Option<&'static str> {
    TEXTURE_FILES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, file)| *file)
}

fn side(heading: &str, body: &[&str], picture: Option<PictureContent>) -> SideContent {
    SideContent {
        heading: heading.to_owned(),
        body: body.iter().map(|l| (*l).to_owned()).collect(),
        picture,
    }
}

fn link(texture: &'static str, url: &str) -> Option<PictureContent> {
    Some(PictureContent {
        texture,
        action: Action::url(url),
    })
}

pub fn portfolio() -> Vec<PrismContent> {
    vec![
        PrismContent {
            title: "About Me".into(),
            sides: vec![
                side("Work Experience", &[], None),
                side("Education", &[], None),
                side(
                    "Pic of me",
                    &[],
                    Some(PictureContent {
                        texture: "4peaks",
                        action: Action::Url(None),
                    }),
                ),
                side("Socials", &[], None),
                side("Hobbies", &[], None),
            ],
        },
        PrismContent {
            title: "Projects".into(),
            sides: vec![
                side("50 High Points", &["Coming soon..."], None),
                side(
                    "Online Chess",
                    &[
                        "Fully functional chess server",
                        "written in Java. For now, the client",
                        "is available as an executable .jar.",
                    ],
                    link("chess", "https://cs240.noahpratt.com"),
                ),
                side(
                    "Family Map",
                    &[
                        "Artificial family history data",
                        "generation in both Java and Go.",
                        "Client is a native Android app.",
                    ],
                    link("fms", "https://fms.noahpratt.com"),
                ),
                side(
                    "Music Metrics",
                    &[
                        "Full stack app to see stats about",
                        "your all-time Spotify listening",
                        "history. Written in Go and React.",
                    ],
                    link("mm", "https://musicmetrics.app"),
                ),
                side(
                    "GoatHouse Pizza",
                    &[
                        "Online hub for my pizza company.",
                        "Front end written in Vanilla JS",
                        "and utilizes Microsoft Azure.",
                    ],
                    link("ghp", "https://goathousepizza.com"),
                ),
            ],
        },
        PrismContent {
            title: "Skills".into(),
            sides: vec![
                side("Java", &["Chess server and Family Map."], None),
                side("Go", &["Music Metrics and Family Map", "back ends."], None),
                side("JavaScript & React", &["Music Metrics front end."], None),
                side("Cloud / Azure", &["GoatHouse Pizza hosting."], None),
                side("Android", &["Family Map native client."], None),
            ],
        },
        PrismContent {
            title: "Extras".into(),
            sides: vec![
                side(
                    "Fun Fact",
                    &["Click the picture, then check", "the developer console."],
                    Some(PictureContent {
                        texture: "fun-fact",
                        action: Action::Command(Command::FunFact),
                    }),
                ),
                side("This Site", &["Rendered with wgpu", "on WebGPU."], None),
                side("Resume", &["Available on request."], None),
                side("Contact", &[], None),
                side("Thanks", &["Thanks for stopping by!"], None),
            ],
        },
    ]
}
