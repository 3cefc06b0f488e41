use crate::portfolio::models::{NewProject, NewSkill};

const ANALYTICS_IMAGE: &str =
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?q=80&w=1000&auto=format&fit=crop";
const ECOMMERCE_IMAGE: &str =
    "https://images.unsplash.com/photo-1586528116311-ad8dd3c8310d?q=80&w=1000&auto=format&fit=crop";

pub fn default_skills() -> Vec<NewSkill> {
    [
        ("MySQL", "SiMysql", "Database", 95),
        ("PowerBI", "SiPowerbi", "Visualization", 90),
        ("Excel", "SiMicrosoftexcel", "Analysis", 98),
        ("Python", "SiPython", "Analysis", 85),
        ("Tableau", "SiTableau", "Visualization", 80),
        ("SQL Server", "SiMicrosoftsqlserver", "Database", 88),
    ]
    .into_iter()
    .map(|(name, icon, category, proficiency)| NewSkill {
        name: name.to_string(),
        icon: icon.to_string(),
        category: category.to_string(),
        proficiency,
    })
    .collect()
}

pub fn default_projects() -> Vec<NewProject> {
    vec![
        project(
            "Sales Performance Analysis using Excel",
            "End-to-end Excel analysis project covering sales trends, product performance, \
             country-wise contribution, order completion status, and deal size impact through \
             pivot-driven dashboarding.",
            &["Microsoft Excel", "Pivot Tables", "Excel Charts"],
            ANALYTICS_IMAGE,
        ),
        project(
            "SQL E-commerce Sales Analysis",
            "SQL (MySQL) analysis of a Kaggle e-commerce sales dataset covering performance, \
             category trends, payment usage, discount impact, and customer purchase behavior.",
            &["MySQL", "SQL", "CSV"],
            ECOMMERCE_IMAGE,
        ),
        project(
            "Flipkart Product Data Analysis using Excel",
            "Excel-driven analysis of Flipkart product data to evaluate customer behavior, \
             pricing strategy, discount effects, and high-performing product categories.",
            &["Microsoft Excel", "Pivot Tables", "Dashboard Design"],
            ANALYTICS_IMAGE,
        ),
    ]
}

fn project(title: &str, description: &str, technologies: &[&str], image_url: &str) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        link: Some("#".to_string()),
        image_url: image_url.to_string(),
    }
}
