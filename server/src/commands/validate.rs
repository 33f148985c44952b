use color_eyre::Result;
use recipes::RecipeBook;

pub(crate) fn validate() -> Result<()> {
    let book = RecipeBook::from_static_dir()?;

    println!("Validating {} recipes", book.recipes().len());
    for recipe in book.recipes() {
        println!("Validating {}...", recipe.path().display());
        recipe.validate()?;
    }
    println!("Recipes Valid! ✅");

    Ok(())
}
