//! The two fixed 256-entry dictionaries a [`Rank`](crate::domain::model::Rank) indexes into.
//!
//! Entries are kept exactly as published, including `butter ` with its trailing
//! space next to `butter`, so that existing names never change.

use crate::domain::model::WordList;

/// First half of a given name, selected by the high byte of the rank.
pub static ADJECTIVES: WordList = WordList::new([
    "adorable",
    "agreeable",
    "alive",
    "ancient",
    "angry",
    "aroused",
    "beautiful",
    "beefy",
    "better",
    "bewildered",
    "big",
    "biting",
    "bitter",
    "black",
    "bland",
    "blue",
    "blushing",
    "boiling",
    "bored",
    "brave",
    "breeze",
    "brief",
    "bright",
    "broad",
    "broken",
    "bulky",
    "bumpy",
    "burly",
    "calm",
    "careful",
    "charming",
    "cheeky",
    "cheerful",
    "chilly",
    "chubby",
    "clean",
    "clear",
    "clever",
    "cloudy",
    "clueless",
    "clumsy",
    "cold",
    "colorful",
    "colossal",
    "combative",
    "comfortable",
    "cooing",
    "cool",
    "creepy",
    "crooked",
    "cuddly",
    "curly",
    "curved",
    "damaged",
    "damp",
    "dead",
    "deafening",
    "deep",
    "defeated",
    "delicious",
    "delightful",
    "dirty",
    "drab",
    "dry",
    "dusty",
    "eager",
    "early",
    "easy",
    "elegant",
    "embarrassed",
    "erect",
    "faint",
    "faithful",
    "famous",
    "fancy",
    "fast",
    "fat",
    "fierce",
    "filthy",
    "flaky",
    "flat",
    "fluffy",
    "freezing",
    "fresh",
    "gentle",
    "gifted",
    "gigantic",
    "glamorous",
    "gray",
    "greasy",
    "great",
    "green",
    "grumpy",
    "handsome",
    "happy",
    "helpful",
    "helpless",
    "high",
    "hissing",
    "hollow",
    "hot",
    "huge",
    "icy",
    "immense",
    "important",
    "inexpensive",
    "itchy",
    "jealous",
    "jolly",
    "juicy",
    "kind",
    "large",
    "late",
    "lazy",
    "little",
    "lively",
    "long",
    "loose",
    "loud",
    "low",
    "magnificent",
    "mammoth",
    "massive",
    "melodic",
    "melted",
    "miniature",
    "modern",
    "mushy",
    "mysterious",
    "narrow",
    "nervous",
    "nice",
    "noisy",
    "nutritious",
    "obedient",
    "obnoxious",
    "odd",
    "old",
    "orange",
    "panicky",
    "petite",
    "plain",
    "powerful",
    "prickly",
    "proud",
    "puny",
    "purple",
    "purring",
    "quaint",
    "quick",
    "quiet",
    "rainy",
    "rapid",
    "raspy",
    "red",
    "relieved",
    "repulsive",
    "rich",
    "rotten",
    "round",
    "salty",
    "sarcastic",
    "scant",
    "scary",
    "scattered",
    "scrawny",
    "screeching",
    "selfish",
    "shaggy",
    "shaky",
    "shallow",
    "sharp",
    "shiny",
    "short",
    "shy",
    "silky",
    "skinny",
    "slimy",
    "slippery",
    "slow",
    "small",
    "smarmy",
    "smiling",
    "smoggy",
    "smooth",
    "smug",
    "soggy",
    "solid",
    "sore",
    "sour",
    "sparkling",
    "spicy",
    "splendid",
    "spotless",
    "square",
    "stale",
    "steady",
    "steep",
    "sticky",
    "stormy",
    "stout",
    "straight",
    "strange",
    "strong",
    "stunning",
    "substantial",
    "successful",
    "succulent",
    "superficial",
    "superior",
    "swanky",
    "sweet",
    "swift",
    "tall",
    "tart",
    "tasteless",
    "tasty",
    "teeny",
    "tender",
    "tense",
    "terrible",
    "testy",
    "turgid",
    "thick",
    "thoughtful",
    "thundering",
    "tight",
    "timely",
    "tiny",
    "tricky",
    "trite",
    "troubled",
    "twitter pated",
    "ugliest",
    "uneven",
    "unsightly",
    "upset",
    "uptight",
    "vast",
    "vexed",
    "victorious",
    "voiceless",
    "warm",
    "weak",
    "wet",
    "whispering",
    "white",
    "wide",
    "witty",
    "wooden",
    "worried",
    "wrong",
    "yellow",
    "young",
    "yummy",
    "zealous",
]);

/// Second half of a given name, selected by the low byte of the rank.
pub static NOUNS: WordList = WordList::new([
    "actor",
    "adenoid",
    "airplane",
    "airport",
    "akita",
    "albatross",
    "alligator",
    "ant",
    "apple",
    "army",
    "aunt",
    "badger",
    "balinese",
    "ball",
    "banana",
    "bandicoot",
    "barnacle",
    "baseball",
    "basket",
    "bat",
    "bear",
    "beard",
    "beaver",
    "beef",
    "berry",
    "bird",
    "bison",
    "boy",
    "bread",
    "brother",
    "brush",
    "buffalo",
    "bulb",
    "butter",
    "butter ",
    "butterfly",
    "caboose",
    "cactus",
    "caiman",
    "calamity",
    "camel",
    "canoe",
    "caramel",
    "cargo",
    "carpenter",
    "cast",
    "cave",
    "cent",
    "chamois",
    "chaps",
    "cheetah",
    "cherry",
    "chicken",
    "chinook",
    "chipmunk",
    "chocolate",
    "cloud",
    "cobweb",
    "cockroach",
    "coil",
    "collie",
    "coral",
    "cougar",
    "cow",
    "cracker",
    "cream",
    "crocodile",
    "croissant",
    "custard",
    "cuttlefish",
    "dad",
    "dalmatian",
    "death",
    "deer",
    "dhole",
    "dingo",
    "dinner",
    "discus",
    "doctor",
    "dodo",
    "dog",
    "doll",
    "dolphin",
    "donkey",
    "door",
    "dormouse",
    "dotard",
    "doughnut",
    "dragonfly",
    "drever",
    "droplet",
    "duck",
    "dugong",
    "dunker",
    "eagle",
    "earlobe",
    "earwig",
    "eggnog",
    "ejection",
    "elbow",
    "elephant",
    "engineer",
    "eyeball",
    "face",
    "falcon",
    "ferret",
    "figure",
    "fipple",
    "fireman",
    "fish",
    "flamingo",
    "flavor",
    "flock",
    "flounder",
    "fog",
    "fork",
    "frigatebird",
    "garlic",
    "gate",
    "gecko",
    "gerbil",
    "glove",
    "goose",
    "gopher",
    "grain",
    "grammar",
    "grasshopper",
    "grouse",
    "guppy",
    "hair",
    "haircut",
    "hammer",
    "hamster",
    "hand",
    "hare",
    "hedgehog",
    "heron",
    "holiday",
    "horse",
    "hot",
    "human",
    "hydrant",
    "iguana",
    "impact",
    "jaguar",
    "ketchup",
    "kidney",
    "knob",
    "laundry",
    "lecher",
    "lentil",
    "life",
    "liver",
    "lizard",
    "magpie",
    "manatee",
    "martian",
    "mask",
    "mayfly",
    "meat",
    "meerkat",
    "melody",
    "mime",
    "mist",
    "mole",
    "mom",
    "moose",
    "mouse",
    "mule",
    "mustache",
    "napkin",
    "newt",
    "nipples",
    "nose",
    "nostril",
    "nougat",
    "number",
    "oatmeal",
    "ocelot",
    "octopus",
    "ointment",
    "opossum",
    "orifice",
    "ostrich",
    "otter",
    "oyster",
    "paddle",
    "pancake",
    "pants",
    "paper",
    "paradox",
    "parrot",
    "peacock",
    "pelican",
    "pelvis",
    "penguin",
    "pest",
    "pig",
    "pineapple",
    "platypus",
    "popcorn",
    "porcupine",
    "possum",
    "puffin",
    "pug",
    "queen",
    "quiet",
    "quoll",
    "rabbit",
    "raccoon",
    "ragdoll",
    "rat",
    "robot",
    "rubber",
    "salamander",
    "sauce",
    "scarf",
    "scorpion",
    "sheep",
    "shelf",
    "sideburns",
    "sister",
    "snowshoe",
    "sparrow",
    "spork",
    "spelling",
    "sponge",
    "spoon",
    "squid",
    "sugar",
    "suspenders",
    "swan",
    "termite",
    "thighs",
    "throb",
    "toffee",
    "tomato",
    "tortilla",
    "toucan",
    "trampoline",
    "tube",
    "turkey",
    "twig",
    "uncle",
    "uvula",
    "vanilla",
    "vogon",
    "weasel",
    "wheel",
    "whiskey",
    "wombat",
    "wrench",
    "wumpus",
    "yak",
    "zebra",
    "zeppelin",
]);
