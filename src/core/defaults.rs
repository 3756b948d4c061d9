// src/core/defaults.rs
//! The built-in vocabulary used until a stored or imported document replaces it.

use crate::core::types::{Routine, Tile};
use crate::core::vocabulary::VocabularyDocument;

fn tiles(entries: &[(&str, &str, &str)]) -> Vec<Tile> {
    entries
        .iter()
        .map(|&(key, label, icon)| Tile::new(key, label, icon))
        .collect()
}

fn words(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|w| w.to_string()).collect()
}

fn routine(key: &str, label: &str, icon: &str, phrases: &[&[&str]]) -> Routine {
    Routine {
        key: key.to_string(),
        label: label.to_string(),
        icon: icon.to_string(),
        phrases: phrases.iter().map(|p| words(p)).collect(),
    }
}

pub fn default_document() -> VocabularyDocument {
    let mut doc = VocabularyDocument {
        starters: tiles(&[
            ("i_want", "I want", "Hand"),
            ("i_need", "I need", "HelpCircle"),
            ("can_i", "Can I", "MessageSquare"),
            ("i_feel", "I feel", "Heart"),
            ("i_dont_want", "I don’t want", "ThumbsDown"),
            ("i_like", "I like", "ThumbsUp"),
            ("all_done", "All done", "DoorOpen"),
            ("lets", "Let’s", "Users"),
            ("its_too", "It’s too…", "Activity"),
            ("im", "I’m", "Home"),
            ("please", "Please", "Hand"),
        ]),
        ..Default::default()
    };

    let contexts: Vec<(&str, Vec<Tile>)> = vec![
        (
            "i_want",
            tiles(&[
                ("to_go", "to go", "MapPin"),
                ("to_eat", "to eat", "Utensils"),
                ("to_drink", "to drink", "CupSoda"),
                ("to_play", "to play", "Bike"),
                ("to_watch", "to watch", "Tv"),
                ("to_do", "to do", "Lightbulb"),
                ("to_rest", "to rest", "BedDouble"),
                ("aahils_choice", "Aahil’s choice", "Star"),
            ]),
        ),
        (
            "i_need",
            tiles(&[
                ("help", "help", "HelpCircle"),
                ("a_break", "a break", "Timer"),
                ("to_use", "to use", "Settings"),
            ]),
        ),
        (
            "can_i",
            tiles(&[("have", "have", "Sandwich"), ("go", "go", "MapPin")]),
        ),
        ("i_feel", tiles(&[("feel_list", "—", "Heart")])),
        (
            "i_dont_want",
            tiles(&[("to", "to", "DoorOpen"), ("this_that", "this/that", "EyeOff")]),
        ),
        (
            "i_like",
            tiles(&[("to", "to", "ThumbsUp"), ("things", "—", "Star")]),
        ),
        ("all_done", tiles(&[("with", "with", "RotateCcw")])),
        (
            "lets",
            tiles(&[("play", "play", "Users"), ("go", "go", "MapPin")]),
        ),
        ("its_too", tiles(&[("levels", "—", "Activity")])),
        ("im", tiles(&[("states", "—", "Home")])),
        ("please", tiles(&[("actions", "—", "Hand")])),
    ];
    for (starter, list) in contexts {
        doc.contexts.insert(starter.to_string(), list);
    }

    let specifics: &[(&str, &[&str])] = &[
        (
            "to_go",
            &[
                "outside",
                "for a walk",
                "for a hike",
                "to the park",
                "to school",
                "to Usman Mamoo’s house",
                "to Aira’s house",
                "to Taha’s house",
                "to Amilia’s house",
                "to therapy",
                "to speech therapy",
                "to OT",
                "horse riding",
            ],
        ),
        (
            "to_eat",
            &[
                "biryani",
                "rice and chicken",
                "nuggets",
                "wings",
                "burger",
                "pancakes",
                "peanut butter and jam",
                "fruits",
                "fries",
            ],
        ),
        (
            "to_drink",
            &["juice", "water", "milk", "smoothie", "hot chocolate"],
        ),
        (
            "to_play",
            &[
                "on iPad",
                "outside",
                "with Lego",
                "with cars",
                "with toys",
                "with Sharjil",
                "with Qasim",
                "ride my electric bike",
                "listen to music",
            ],
        ),
        (
            "to_watch",
            &["YouTube", "a movie", "cartoons", "music videos", "funny clips"],
        ),
        (
            "to_do",
            &[
                "daily calendar",
                "painting",
                "drawing",
                "music",
                "homework",
                "read a book",
                "nothing",
            ],
        ),
        (
            "to_rest",
            &["lie down", "relax", "be alone", "nap", "cuddle with blanket"],
        ),
        (
            "aahils_choice",
            &["hiking", "walking", "new song", "new game", "new place"],
        ),
        (
            "help",
            &[
                "with dressing",
                "with shoes",
                "with homework",
                "with food",
                "with tablet",
                "with game",
                "with calendar",
                "with getting ready",
                "with brushing teeth",
            ],
        ),
        (
            "a_break",
            &["from talking", "from noise", "from people", "from screens"],
        ),
        (
            "to_use",
            &["the bathroom", "my tablet", "my headphones", "my blanket", "my pillow"],
        ),
        (
            "have",
            &["a snack", "iPad", "headphones", "more food", "a turn", "music", "quiet time"],
        ),
        (
            "go",
            &[
                "outside",
                "to the bathroom",
                "to the kitchen",
                "to see mom",
                "to see dad",
                "to play",
                "to horse riding",
                "to OT",
                "to speech therapy",
            ],
        ),
        (
            "feel_list",
            &[
                "happy",
                "sad",
                "angry",
                "tired",
                "scared",
                "excited",
                "bored",
                "hungry",
                "sleepy",
                "sick",
                "calm",
                "proud",
                "frustrated",
                "silly",
            ],
        ),
        (
            "to",
            &[
                "go",
                "eat",
                "play",
                "share",
                "listen",
                "take a bath",
                "ride bike",
                "talk",
                "do work",
            ],
        ),
        (
            "this_that",
            &["this", "that", "loud sound", "bright light", "music", "smell", "wait"],
        ),
        (
            "things",
            &[
                "biryani",
                "rice",
                "nuggets",
                "burgers",
                "music",
                "horse riding",
                "walks",
                "hiking",
                "calendar time",
                "electric bike",
            ],
        ),
        (
            "with",
            &["eating", "playing", "iPad", "calendar", "therapy", "homework", "talking"],
        ),
        (
            "play",
            &["together", "ball", "blocks", "bike", "music", "drawing"],
        ),
        (
            "go2",
            &["outside", "walk", "ride", "eat", "sleep", "calendar time", "therapy"],
        ),
        (
            "levels",
            &["loud", "bright", "hot", "cold", "noisy", "smelly"],
        ),
        (
            "states",
            &["ready", "not ready", "okay", "not okay", "hungry", "tired", "excited"],
        ),
        (
            "actions",
            &["stop", "wait", "help", "come here", "listen", "open", "close"],
        ),
    ];
    for &(bucket, options) in specifics {
        doc.specifics.insert(bucket.to_string(), words(options));
    }

    doc.routines = vec![
        routine(
            "morning",
            "Morning",
            "CloudSun",
            &[
                &["I want", "to eat", "pancakes"],
                &["I want", "to take", "a bath"],
                &["I need", "help", "with clothes"],
                &["I’m", "—", "ready"],
            ],
        ),
        routine(
            "school",
            "School",
            "School",
            &[
                &["I want", "to go", "to school"],
                &["I need", "to use", "the bathroom"],
                &["I feel", "—", "happy"],
                &["I don’t want", "to", "talk"],
            ],
        ),
        routine(
            "therapy",
            "Therapy",
            "Brain",
            &[
                &["I want", "to go", "to speech therapy"],
                &["I want", "to go", "to OT"],
                &["I want", "to do", "horse riding"],
                &["I need", "help", "with calendar"],
            ],
        ),
        routine(
            "lunch",
            "Lunch",
            "Utensils",
            &[
                &["I want", "to eat", "biryani"],
                &["I’m", "—", "hungry"],
                &["Can I", "have", "a snack"],
                &["All done", "with", "eating"],
            ],
        ),
        routine(
            "play",
            "Play",
            "Bike",
            &[
                &["I want", "to play", "ride my electric bike"],
                &["I want", "to play", "with Lego"],
                &["I want", "to do", "daily calendar"],
                &["I want", "to play", "listen to music"],
            ],
        ),
        routine(
            "evening",
            "Evening",
            "CloudSun",
            &[
                &["I want", "to watch", "YouTube"],
                &["I need", "a break", "from noise"],
                &["Let’s", "go", "sleep"],
                &["I’m", "—", "tired"],
            ],
        ),
        routine(
            "bedtime",
            "Bedtime",
            "BedDouble",
            &[
                &["I’m", "—", "sleepy"],
                &["I need", "to use", "my blanket"],
                &["Please", "—", "turn off lights"],
                &["Good night"],
            ],
        ),
    ];

    doc
}
