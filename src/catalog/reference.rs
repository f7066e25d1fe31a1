//! Built-in reference catalog.

use glam::Vec3;

use super::{CatalogSummary, Project, SkillGroup, TechNode};

fn tech(
    name: &str,
    position: [f32; 3],
    color: &str,
    description: &str,
    proficiency: u8,
    projects: &[(&str, &str)],
) -> TechNode {
    TechNode {
        name: name.to_owned(),
        position: Vec3::from_array(position),
        color: color.to_owned(),
        description: description.to_owned(),
        proficiency,
        projects: projects
            .iter()
            .map(|&(name, description)| Project {
                name: name.to_owned(),
                description: description.to_owned(),
            })
            .collect(),
    }
}

pub(super) fn summary() -> CatalogSummary {
    let group = |title: &str, color: &str, members: &[&str]| SkillGroup {
        title: title.to_owned(),
        color: color.to_owned(),
        members: members.iter().map(|&m| m.to_owned()).collect(),
    };
    CatalogSummary {
        headline: "React & Next.js | TypeScript | Redux & Zustand | \
                   Firebase & Supabase | Learning Node.js, Express & MongoDB | \
                   Building Functional & Scalable Full-Stack Web Apps"
            .to_owned(),
        groups: vec![
            group("Frontend", "#60a5fa", &["React", "Next.js", "TypeScript"]),
            group("State Management", "#c084fc", &["Redux", "Zustand"]),
            group("Backend Services", "#4ade80", &["Firebase", "Supabase"]),
            group("Learning", "#fb923c", &["Node.js", "Express", "MongoDB"]),
        ],
    }
}

pub(super) fn nodes() -> Vec<TechNode> {
    vec![
        tech(
            "React",
            [3.0, 2.0, 0.0],
            "#61DAFB",
            "Frontend Library",
            95,
            &[
                ("E-commerce Platform", "Full-stack React app"),
                ("Dashboard Analytics", "Real-time data visualization"),
                ("Social Media App", "Interactive user platform"),
            ],
        ),
        tech(
            "Next.js",
            [-3.0, 1.0, 2.0],
            "#000000",
            "React Framework",
            90,
            &[
                ("Portfolio Website", "SSR optimized site"),
                ("Blog Platform", "Content management system"),
            ],
        ),
        tech(
            "TypeScript",
            [-2.0, 3.0, 1.0],
            "#3178C6",
            "Type Safety",
            88,
            &[
                ("API Framework", "Type-safe backend"),
                ("Component Library", "Reusable UI components"),
            ],
        ),
        tech(
            "Redux",
            [2.0, -2.0, -3.0],
            "#764ABC",
            "State Management",
            85,
            &[
                ("Complex Dashboard", "Multi-component state"),
                ("Shopping Cart", "E-commerce state logic"),
            ],
        ),
        tech(
            "Zustand",
            [4.0, 0.0, -2.0],
            "#FF6B35",
            "Lightweight State",
            80,
            &[
                ("Task Manager", "Simple state management"),
                ("Theme Switcher", "Global app state"),
            ],
        ),
        tech(
            "Firebase",
            [-4.0, -1.0, 0.0],
            "#FFCA28",
            "Backend as a Service",
            82,
            &[
                ("Real-time Chat", "Firebase Firestore"),
                ("User Authentication", "Firebase Auth"),
            ],
        ),
        tech(
            "Supabase",
            [1.0, 3.0, -2.0],
            "#3ECF8E",
            "Open Source Firebase",
            78,
            &[
                ("Blog CMS", "PostgreSQL backend"),
                ("User Profiles", "Row-level security"),
            ],
        ),
        tech(
            "Node.js",
            [-1.0, -3.0, 2.0],
            "#339933",
            "Backend Runtime (Learning)",
            65,
            &[
                ("REST API", "Express.js server"),
                ("File Upload", "Multer integration"),
            ],
        ),
        tech(
            "Express",
            [3.0, -1.0, 3.0],
            "#000000",
            "Web Framework (Learning)",
            60,
            &[
                ("API Routes", "RESTful endpoints"),
                ("Middleware", "Authentication layer"),
            ],
        ),
        tech(
            "MongoDB",
            [-3.0, 2.0, -1.0],
            "#47A248",
            "NoSQL Database (Learning)",
            58,
            &[
                ("User Data", "Document storage"),
                ("Product Catalog", "Schema design"),
            ],
        ),
        tech(
            "Three.js",
            [0.0, 4.0, 0.0],
            "#000000",
            "3D Graphics",
            75,
            &[
                ("3D Portfolio", "Interactive 3D scenes"),
                ("WebGL Visualizer", "Data visualization"),
            ],
        ),
    ]
}
