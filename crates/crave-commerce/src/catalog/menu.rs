//! The built-in Cave Crave menu.

use crate::catalog::{Category, Flavor, Product};
use crate::money::Money;

struct MenuEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: i64,
    category: Category,
    flavored: bool,
    image: &'static str,
    gradient: &'static str,
}

const FLAVORS: &[(&str, i64)] = &[
    ("Original", 0),
    ("Garlic", 5),
    ("Jack Daniels", 5),
    ("Yangnyeom", 5),
    ("Yangnyeom X2", 5),
    ("Spicy BBQ", 5),
    ("Lemon Glaze", 5),
    ("Yangnyeom W Garlic", 10),
    ("24 Cheddar", 10),
    ("Snow Cheese", 10),
    ("Yangnyeom X2 W Garlic", 10),
    ("Dark Truffle", 10),
];

const PRODUCTS: &[MenuEntry] = &[
    MenuEntry {
        id: "c1",
        name: "Iced Caramel Macchiato",
        description: "Espresso, milk, and luscious caramel syrup, served over ice.",
        price: 39,
        category: Category::WithCoffee,
        flavored: false,
        image: "Images/iced-caramel-macchiatos-coffee-no-bg.png",
        gradient: "from-[#38220f] to-[#dfc28a]",
    },
    MenuEntry {
        id: "c2",
        name: "Donya Berry With Coffee",
        description: "Premium Japanese matcha harmonized with milk and bold espresso.",
        price: 39,
        category: Category::WithCoffee,
        flavored: false,
        image: "Images/donya-berry-coffee-no-bg.png",
        gradient: "from-[#cb5475] to-[#f2d4dc]",
    },
    MenuEntry {
        id: "c3",
        name: "Don Matchatos With Coffee",
        description: "Japanese matcha delicately harmonized with milk and espresso.",
        price: 39,
        category: Category::WithCoffee,
        flavored: false,
        image: "Images/don-matchatos-coffee-no-bg.png",
        gradient: "from-[#49592a] to-[#c3d4a5]",
    },
    MenuEntry {
        id: "c4",
        name: "Don Darko With Coffee",
        description: "Finest Belgian dark chocolate blended with bold espresso.",
        price: 39,
        category: Category::WithCoffee,
        flavored: false,
        image: "Images/don-darko-coffee-no-bg.png",
        gradient: "from-[#0c0906] to-[#dbc1ac]",
    },
    MenuEntry {
        id: "c5",
        name: "Matcha Berry With Coffee",
        description: "Antioxidant-rich matcha with strawberry notes and espresso.",
        price: 39,
        category: Category::WithCoffee,
        flavored: false,
        image: "Images/matcha-berry-coffee-no-bg.png",
        gradient: "from-[#82a742] to-[#cc6985]",
    },
    MenuEntry {
        id: "c6",
        name: "Black Forest With Coffee",
        description: "Belgian craftmanship meets natural Taiwanese strawberries.",
        price: 39,
        category: Category::WithCoffee,
        flavored: false,
        image: "Images/black-forest-coffee-no-bg.png",
        gradient: "from-[#8e0b21] to-[#e5a9ba]",
    },
    MenuEntry {
        id: "c7",
        name: "Oreo With Coffee",
        description: "Classic Oreo cookie taste blended into rich coffee.",
        price: 39,
        category: Category::WithCoffee,
        flavored: false,
        image: "Images/oreo-coffee-no-bg.png",
        gradient: "from-[#333] to-[#cfcfcf]",
    },
    MenuEntry {
        id: "c8",
        name: "Brown Spanish Latte",
        description: "Balanced coffee and creamy milk with brown sugar syrup.",
        price: 39,
        category: Category::WithCoffee,
        flavored: false,
        image: "Images/brown-spanish-latte-no-bg.png",
        gradient: "from-[#967259] to-[#f7ebde]",
    },
    MenuEntry {
        id: "nc1",
        name: "Don Matchatos",
        description: "Premium Japanese matcha harmonized with velvety milk.",
        price: 39,
        category: Category::NoCoffee,
        flavored: false,
        image: "Images/don-matchatos-no-coffee-no-bg.png",
        gradient: "from-[#49592a] to-[#c6e99f]",
    },
    MenuEntry {
        id: "nc2",
        name: "Donya Berry",
        description: "Succulent Taiwanese strawberries mingled with creamy milk.",
        price: 39,
        category: Category::NoCoffee,
        flavored: false,
        image: "Images/donya-berry-no-coffee-no-bg.png",
        gradient: "from-[#be2952] to-[#f2d4dc]",
    },
    MenuEntry {
        id: "nc3",
        name: "Don Darko",
        description: "Finest Belgian dark chocolate blended with creamy milk.",
        price: 39,
        category: Category::NoCoffee,
        flavored: false,
        image: "Images/don-darko-coffee-no-bg.png",
        gradient: "from-[#0c0906] to-[#e0caca]",
    },
    MenuEntry {
        id: "nc4",
        name: "Matcha Berry",
        description: "Harmony of Japanese matcha and Taiwanese strawberries.",
        price: 39,
        category: Category::NoCoffee,
        flavored: false,
        image: "Images/matcha-berry-no-coffee-no-bg.png",
        gradient: "from-[#49592a] to-[#cc6985]",
    },
    MenuEntry {
        id: "nc5",
        name: "Black Forest",
        description: "Belgian craftmanship and sweet Taiwanese strawberries.",
        price: 39,
        category: Category::NoCoffee,
        flavored: false,
        image: "Images/black-forest-no-coffee-no-bg.png",
        gradient: "from-[#8e0b21] to-[#f2d4dc]",
    },
    MenuEntry {
        id: "nc6",
        name: "Oreo",
        description: "Creamy milk blended with classic Oreo cookies.",
        price: 39,
        category: Category::NoCoffee,
        flavored: false,
        image: "Images/oreo-no-coffee-no-bg.png",
        gradient: "from-[#333] to-[#cfcfcf]",
    },
    MenuEntry {
        id: "m1",
        name: "RM2: 2pcs Boneless Chicken",
        description: "Two pieces of juicy Korean fried chicken with rice.",
        price: 95,
        category: Category::Meal,
        flavored: true,
        image: "Images/24-chicken-RM2.png",
        gradient: "from-orange-600 to-yellow-400",
    },
    MenuEntry {
        id: "m2",
        name: "RM3: 3pcs Boneless Chicken",
        description: "Three pieces of signature Korean fried chicken with rice.",
        price: 130,
        category: Category::Meal,
        flavored: true,
        image: "Images/24-chicken-RM3.png",
        gradient: "from-orange-600 to-yellow-400",
    },
    MenuEntry {
        id: "m3",
        name: "KRM2: Kimchi Rice Meal",
        description: "Two pieces of boneless chicken with spicy kimchi rice.",
        price: 135,
        category: Category::Meal,
        flavored: true,
        image: "Images/24-chicken-KRM2.png",
        gradient: "from-red-600 to-orange-400",
    },
    MenuEntry {
        id: "m4",
        name: "KRM3: Large Kimchi Meal",
        description: "Three pieces of boneless chicken with spicy kimchi rice.",
        price: 170,
        category: Category::Meal,
        flavored: true,
        image: "Images/24-chicken-KRM3.png",
        gradient: "from-red-600 to-orange-400",
    },
];

/// Products of the built-in menu, in display order.
pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(|entry| {
            let product = Product::new(
                entry.id,
                entry.name,
                entry.description,
                Money::new(entry.price),
                entry.category,
            )
            .with_presentation(entry.image, entry.gradient);
            if entry.flavored {
                product.flavored()
            } else {
                product
            }
        })
        .collect()
}

/// Flavors of the built-in menu, in display order.
pub fn flavors() -> Vec<Flavor> {
    FLAVORS
        .iter()
        .map(|(name, price)| Flavor::new(*name, Money::new(*price)))
        .collect()
}
