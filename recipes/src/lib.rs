//! A "recipe" content type: file-backed recipe posts with structured cooking
//! metadata, plus the rendering pipeline that turns that metadata into HTML.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use chrono::NaiveDate;
use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use include_dir::{include_dir, Dir, File};
use markdown::{
    mdast::{Node, Root},
    to_mdast, ParseOptions,
};
use serde::{Deserialize, Serialize};

pub mod duration;
pub mod filters;
pub mod ingredients;
pub mod preheat;
pub mod render;
pub mod sanitize;
pub mod slug;
pub mod steps;
pub mod store;
pub mod taxonomy;
pub mod times;

use self::{
    ingredients::Ingredient, preheat::Preheat, slug::slugify, steps::InstructionGroup,
};

static COOKBOOK_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/../cookbook");

/// Identifier assigned to a recipe when its book is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct MarkdownAst(pub Root);

impl FromStr for MarkdownAst {
    type Err = color_eyre::Report;

    fn from_str(contents: &str) -> Result<Self> {
        let mut options: ParseOptions = ParseOptions::default();
        options.constructs.frontmatter = true;

        match to_mdast(contents, &options) {
            Ok(Node::Root(ast)) => Ok(Self(ast)),
            Ok(_) => Err(eyre!("Should be a root node")),
            Err(e) => Err(eyre!("Could not make AST. Inner Error: {e}")),
        }
    }
}

impl MarkdownAst {
    pub fn from_file(file: &File) -> Result<Self> {
        let contents = file.contents();
        let contents = std::str::from_utf8(contents).wrap_err("File is not UTF8")?;

        Self::from_str(contents)
    }

    fn frontmatter_yml(&self) -> Result<&str> {
        let children = &self.0.children;
        let Some(Node::Yaml(frontmatter)) = children.first() else {
            return Err(eyre!("Should have a first child with YAML Frontmatter"));
        };

        Ok(&frontmatter.value)
    }

    pub fn frontmatter<T>(&self) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let yaml = self.frontmatter_yml()?;
        serde_yaml::from_str(yaml).wrap_err("Frontmatter should be valid YAML")
    }
}

/// Everything the editing side of the system stores about a recipe. All of
/// the cooking fields are independently optional; a recipe with none of them
/// is still a valid post.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RecipeFrontMatter {
    pub title: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub preheat: Option<Preheat>,
    #[serde(default)]
    pub prep_time: Option<u32>,
    #[serde(default)]
    pub cook_time: Option<u32>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<InstructionGroup>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub meal_types: Vec<String>,
    #[serde(default)]
    pub cuisines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: RecipeId,
    pub frontmatter: RecipeFrontMatter,
    pub ast: MarkdownAst,
    pub path: PathBuf,
}

impl Recipe {
    pub(crate) fn from_file(id: RecipeId, file: &File) -> Result<Recipe> {
        let ast = MarkdownAst::from_file(file)?;
        let frontmatter: RecipeFrontMatter = ast.frontmatter()?;

        Ok(Recipe {
            id,
            frontmatter,
            ast,
            path: file.path().to_owned(),
        })
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.frontmatter.title
    }

    pub fn date(&self) -> &NaiveDate {
        &self.frontmatter.date
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn slug(&self) -> String {
        let stem = self
            .path
            .file_stem()
            .map(std::ffi::OsStr::to_string_lossy)
            .unwrap_or_default();

        slugify(&stem)
    }

    pub fn validate(&self) -> Result<()> {
        if self.frontmatter.title.trim().is_empty() {
            return Err(eyre!("Recipe at {} has an empty title", self.path.display()));
        }

        for group in &self.frontmatter.instructions {
            if group.title.trim().is_empty() {
                return Err(eyre!(
                    "Recipe at {} has an instruction group with no title",
                    self.path.display()
                ));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    #[tracing::instrument(name = "RecipeBook::from_static_dir")]
    pub fn from_static_dir() -> Result<Self> {
        Self::from_dir(&COOKBOOK_DIR)
    }

    pub fn from_dir(dir: &Dir) -> Result<Self> {
        let files = dir
            .find("**/*.md")
            .wrap_err("Invalid cookbook glob")?
            .filter_map(include_dir::DirEntry::as_file);

        let mut recipes = Vec::new();
        let mut next_id = 0_u64;
        for file in files {
            let recipe = Recipe::from_file(RecipeId(next_id), file)
                .wrap_err_with(|| eyre!("Recipe at {} failed to parse", file.path().display()))?;

            recipes.push(recipe);
            next_id += 1;
        }

        Ok(Self { recipes })
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.slug() == slug)
    }

    pub fn by_recency(&self) -> Vec<&Recipe> {
        let mut recipes: Vec<&Recipe> = self.recipes.iter().collect();
        recipes.sort_by_key(|r| std::cmp::Reverse(*r.date()));

        recipes
    }

    pub fn validate(&self) -> Result<()> {
        for recipe in &self.recipes {
            recipe.validate()?;
        }

        Ok(())
    }
}
