// src/words/builtin.rs

// Embedded fallback dictionary, used when no word file is configured
pub const BUILTIN_WORDS: &[&str] = &[
    "abundance", "accordion", "adventure", "afternoon", "airplane", "alligator", "almanac",
    "ambition", "amethyst", "anchorage", "antelope", "apricot", "aquarium", "archipelago",
    "armadillo", "artichoke", "atmosphere", "autumnal", "avalanche", "backpack", "badminton",
    "balloon", "bandwidth", "barnacle", "baseline", "bathtub", "beachfront", "bedrock",
    "beehive", "bellflower", "birchwood", "blackbird", "blueberry", "bookshelf", "boulevard",
    "bracelet", "breakfast", "brighten", "broccoli", "buccaneer", "buttercup", "butterfly",
    "cabinet", "calendar", "campfire", "candlestick", "canyon", "cardinal", "carnival",
    "cartwheel", "cathedral", "celebrate", "chameleon", "chandelier", "charcoal", "checkmate",
    "chestnut", "chimney", "chocolate", "cinnamon", "clockwork", "cloudburst", "coastline",
    "coconut", "compass", "constellation", "copperhead", "cornfield", "cottonwood", "courtyard",
    "crescent", "crocodile", "crossroad", "cucumber", "cupboard", "cyclone", "daffodil",
    "dandelion", "daybreak", "deckchair", "delegate", "dewdrop", "diamond", "dinosaur",
    "discovery", "dolphin", "doorstep", "dragonfly", "driftwood", "drumstick", "eggplant",
    "elevator", "emerald", "envelope", "equator", "evergreen", "everywhere", "explorer",
    "fairground", "falconry", "farmhouse", "feather", "ferryboat", "fieldwork", "fireplace",
    "firework", "flamingo", "flashlight", "floorboard", "footpath", "forecast", "fortress",
    "fountain", "foxglove", "frostbite", "gardener", "gemstone", "geranium", "giraffe",
    "glacier", "goldfinch", "gondola", "grapefruit", "grasshopper", "greenhouse", "guardrail",
    "hailstorm", "hammock", "harmonica", "harvest", "hazelnut", "headland", "heirloom",
    "hedgehog", "highland", "hillside", "honeycomb", "horizon", "horseshoe", "hummingbird",
    "hurricane", "iceberg", "imagine", "ironwood", "island", "jamboree", "jellyfish", "journey",
    "jubilee", "juniper", "kaleidoscope", "kangaroo", "keyboard", "kingfisher", "kitchen",
    "landmark", "lanterns", "lavender", "lemonade", "library", "lighthouse", "limestone",
    "lollipop", "longitude", "macaroni", "magnolia", "mahogany", "mandolin", "marathon",
    "marigold", "marmalade", "meadowlark", "midnight", "milestone", "mockingbird", "monument",
    "moonlight", "mountain", "mulberry", "mushroom", "narwhal", "nectarine", "nightfall",
    "northward", "notebook", "nutshell", "oatmeal", "observatory", "octopus", "orchestra",
    "ornament", "outdoors", "overture", "paintbrush", "pancake", "panorama", "parachute",
    "parakeet", "parsnip", "pathway", "peppermint", "periscope", "pinecone", "pineapple",
    "platypus", "playground", "plumage", "porcupine", "postcard", "pumpkin", "quarterly",
    "quicksand", "quillwork", "raincoat", "rainforest", "raspberry", "rattlesnake", "riverbank",
    "roadrunner", "rosemary", "sailboat", "sandcastle", "sapphire", "saxophone", "scarecrow",
    "seashell", "semaphore", "shipwreck", "silhouette", "skylark", "snowflake", "songbird",
    "sparrowhawk", "spearmint", "spinnaker", "springtime", "stargazer", "starlight",
    "strawberry", "sunflower", "sunlight", "swordfish", "tambourine", "tangerine", "telescope",
    "thistle", "thunderbolt", "timberline", "toboggan", "tortoise", "township", "treasure",
    "trellis", "triangle", "trombone", "tumbleweed", "turquoise", "twilight", "umbrella",
    "underwood", "universe", "upstream", "valentine", "velvet", "vineyard", "volcano",
    "wagonwheel", "walnut", "waterfall", "waterlily", "wavelength", "wheelbarrow", "whirlwind",
    "wildflower", "windmill", "wintergreen", "woodpecker", "workshop", "xylophone", "yardstick",
    "yesterday", "zeppelin", "zucchini",
];
