use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub image_url: String,
}

/// A project before it has been assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub link: Option<String>,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub id: u32,
    pub name: String,
    /// Icon identifier the front end maps to an icon component.
    pub icon: String,
    pub category: String,
    pub proficiency: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSkill {
    pub name: String,
    pub icon: String,
    pub category: String,
    pub proficiency: u8,
}

impl Project {
    pub fn from_new(id: u32, new: NewProject) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            technologies: new.technologies,
            link: new.link,
            image_url: new.image_url,
        }
    }
}

impl Skill {
    pub fn from_new(id: u32, new: NewSkill) -> Self {
        Self {
            id,
            name: new.name,
            icon: new.icon,
            category: new.category,
            proficiency: new.proficiency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_serializes_camel_case() {
        let project = Project {
            id: 1,
            title: "T".to_string(),
            description: "D".to_string(),
            technologies: vec!["SQL".to_string()],
            link: None,
            image_url: "https://example.com/a.jpg".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&project).unwrap(),
            json!({
                "id": 1,
                "title": "T",
                "description": "D",
                "technologies": ["SQL"],
                "link": null,
                "imageUrl": "https://example.com/a.jpg",
            })
        );
    }
}
