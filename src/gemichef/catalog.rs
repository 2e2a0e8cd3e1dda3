//! The fixed sample-recipe catalog shipped with the crate.

use serde::{Deserialize, Serialize};

/// A complete recipe as shown in a browse screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// The predefined catalog. Fixed data, rebuilt on each call; applications
/// hold their own copy.
pub fn predefined_recipes() -> Vec<Recipe> {
    vec![
        Recipe {
            id: 1,
            title: "Classic Spaghetti Carbonara".to_string(),
            description: "A creamy and delicious Italian pasta dish made with eggs, cheese, pancetta, and pepper.".to_string(),
            image_url: "https://picsum.photos/seed/carbonara/600/400".to_string(),
            ingredients: vec![
                "200g spaghetti".to_string(),
                "100g pancetta or guanciale, diced".to_string(),
                "2 large eggs".to_string(),
                "50g Pecorino Romano cheese, grated".to_string(),
                "50g Parmesan cheese, grated".to_string(),
                "2 cloves garlic, minced".to_string(),
                "Freshly ground black pepper".to_string(),
                "Salt to taste".to_string(),
            ],
            instructions: vec![
                "Cook spaghetti according to package directions. Reserve 1 cup of pasta water.".to_string(),
                "While pasta cooks, sauté pancetta in a large skillet over medium heat until crisp. Add garlic and cook for 1 minute more.".to_string(),
                "In a bowl, whisk together eggs and grated cheeses. Season generously with black pepper.".to_string(),
                "Drain the pasta and add it to the skillet with the pancetta. Toss to combine. Remove from heat.".to_string(),
                "Slowly pour the egg and cheese mixture into the pasta, stirring quickly to create a creamy sauce. Add a splash of pasta water if needed to reach desired consistency.".to_string(),
                "Serve immediately with extra cheese and pepper.".to_string(),
            ],
        },
        Recipe {
            id: 2,
            title: "Avocado Toast with Egg".to_string(),
            description: "A simple, nutritious, and satisfying breakfast or snack that is ready in minutes.".to_string(),
            image_url: "https://picsum.photos/seed/avocado/600/400".to_string(),
            ingredients: vec![
                "1 slice of whole-wheat bread".to_string(),
                "1/2 ripe avocado".to_string(),
                "1 large egg".to_string(),
                "1 tsp lemon juice".to_string(),
                "Red pepper flakes to taste".to_string(),
                "Salt and pepper to taste".to_string(),
            ],
            instructions: vec![
                "Toast the bread to your desired crispness.".to_string(),
                "While the bread is toasting, mash the avocado with lemon juice, salt, and pepper in a small bowl.".to_string(),
                "Cook the egg as you like (fried, poached, or scrambled).".to_string(),
                "Spread the mashed avocado evenly on the toast.".to_string(),
                "Top with the cooked egg and a sprinkle of red pepper flakes.".to_string(),
                "Serve immediately and enjoy!".to_string(),
            ],
        },
        Recipe {
            id: 3,
            title: "Chicken Stir-Fry".to_string(),
            description: "A quick, healthy, and flavorful weeknight dinner packed with veggies and tender chicken.".to_string(),
            image_url: "https://picsum.photos/seed/stirfry/600/400".to_string(),
            ingredients: vec![
                "1 lb boneless, skinless chicken breast, cut into bite-sized pieces".to_string(),
                "1 tbsp soy sauce".to_string(),
                "1 tbsp cornstarch".to_string(),
                "2 tbsp vegetable oil".to_string(),
                "1 head of broccoli, cut into florets".to_string(),
                "1 red bell pepper, sliced".to_string(),
                "1 carrot, julienned".to_string(),
                "3 cloves garlic, minced".to_string(),
                "1 tbsp ginger, grated".to_string(),
                "1/4 cup soy sauce".to_string(),
                "2 tbsp honey".to_string(),
                "1 tsp sesame oil".to_string(),
            ],
            instructions: vec![
                "In a bowl, toss chicken with 1 tbsp soy sauce and cornstarch.".to_string(),
                "Heat 1 tbsp vegetable oil in a large skillet or wok over high heat. Add chicken and cook until browned and cooked through. Remove from skillet.".to_string(),
                "Add remaining 1 tbsp oil to the skillet. Add broccoli, bell pepper, and carrot. Stir-fry for 3-5 minutes until crisp-tender.".to_string(),
                "Add garlic and ginger, and cook for another minute until fragrant.".to_string(),
                "In a small bowl, whisk together 1/4 cup soy sauce, honey, and sesame oil.".to_string(),
                "Return chicken to the skillet. Pour the sauce over everything and toss to coat. Cook for 1-2 minutes until the sauce has thickened slightly.".to_string(),
                "Serve hot with rice or noodles.".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_entries_are_complete() {
        let recipes = predefined_recipes();
        assert_eq!(recipes.len(), 3);
        for recipe in &recipes {
            assert!(!recipe.title.is_empty());
            assert!(!recipe.ingredients.is_empty());
            assert!(!recipe.instructions.is_empty());
        }
    }

    #[test]
    fn recipes_serialize_to_json() {
        let json = serde_json::to_string(&predefined_recipes()).unwrap();
        let back: Vec<Recipe> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, predefined_recipes());
    }
}
