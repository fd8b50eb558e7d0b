use armyforge_types::game::GameDescriptor;

/// Supported game systems, in display order.
pub static GAMES: [GameDescriptor; 8] = [
    GameDescriptor {
        id: "grimdark-future",
        name: "Grimdark Future",
        short_name: "GF",
        description: "Sci-fi wargame in a dark future where there is only war",
        image: "https://customer-assets.emergentagent.com/job_tabletop-roster/artifacts/4yhnbky1_gf_cover.jpg",
    },
    GameDescriptor {
        id: "grimdark-future-firefight",
        name: "Grimdark Future Firefight",
        short_name: "GFF",
        description: "Small-scale skirmish battles in the grimdark future",
        image: "https://customer-assets.emergentagent.com/job_tabletop-roster/artifacts/x3uaye60_gff_cover.jpg",
    },
    GameDescriptor {
        id: "grimdark-future-squad",
        name: "Grimdark Future Squad",
        short_name: "GFSQ",
        description: "Squad-based tactical combat in the grimdark future",
        image: "https://customer-assets.emergentagent.com/job_tabletop-roster/artifacts/n649vrml_gfsq_cover.jpg",
    },
    GameDescriptor {
        id: "age-of-fantasy",
        name: "Age of Fantasy",
        short_name: "AoF",
        description: "Fantasy wargame with magic, monsters and epic battles",
        image: "https://customer-assets.emergentagent.com/job_tabletop-roster/artifacts/ef8vm2eh_aof_cover.jpg",
    },
    GameDescriptor {
        id: "age-of-fantasy-regiments",
        name: "Age of Fantasy Regiments",
        short_name: "AoFR",
        description: "Ranked combat fantasy wargame with massive armies",
        image: "https://customer-assets.emergentagent.com/job_tabletop-roster/artifacts/egkkuekh_aofr_cover.jpg",
    },
    GameDescriptor {
        id: "age-of-fantasy-skirmish",
        name: "Age of Fantasy Skirmish",
        short_name: "AoFS",
        description: "Small-scale skirmish battles in a fantasy world",
        image: "https://customer-assets.emergentagent.com/job_tabletop-roster/artifacts/mnmh2se3_aofs_cover.jpg",
    },
    GameDescriptor {
        id: "age-of-fantasy-quest",
        name: "Age of Fantasy Quest",
        short_name: "AoFQ",
        description: "Cooperative dungeon crawling adventure game",
        image: "https://customer-assets.emergentagent.com/job_tabletop-roster/artifacts/00yl2v7x_aofq_cover.jpg",
    },
    GameDescriptor {
        id: "warfleets-ftl",
        name: "Warfleets: FTL",
        short_name: "FTL",
        description: "Space fleet combat and interstellar warfare",
        image: "https://customer-assets.emergentagent.com/job_tabletop-roster/artifacts/gk19bhic_ftl_cover.jpg",
    },
];

pub fn all() -> &'static [GameDescriptor] {
    &GAMES
}

pub fn find(id: &str) -> Option<&'static GameDescriptor> {
    GAMES.iter().find(|g| g.id == id)
}
