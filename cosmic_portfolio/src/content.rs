//! Static portfolio content
//!
//! Categories become planets in the solar-system scene; each carries the
//! projects shown in its gallery overlay. Colors are (base, accent) pairs:
//! the base paints the planet, the accent paints its orbit path and rings.

/// One portfolio project
pub struct Project {
    pub title: &'static str,
    pub year: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub link: &'static str,
}

/// One portfolio category, displayed as a planet
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    /// Relative visual weight; mapped to a display radius by the layout
    pub size: f32,
    pub color: [f32; 4],
    pub accent: [f32; 4],
    pub has_rings: bool,
    pub projects: &'static [Project],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "mobile",
        name: "Mobile Apps",
        size: 120.0,
        color: [0.376, 0.647, 0.980, 1.0], // blue
        accent: [0.133, 0.827, 0.933, 1.0], // cyan
        has_rings: false,
        projects: &[
            Project {
                title: "Fitness Tracker App",
                year: "2024",
                description: "A comprehensive fitness tracking mobile application with workout plans and progress monitoring",
                image_url: "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=800&h=600&fit=crop",
                link: "#",
            },
            Project {
                title: "Food Delivery App",
                year: "2023",
                description: "User-friendly food ordering app with real-time tracking and custom recommendations",
                image_url: "https://images.unsplash.com/photo-1565299624946-b28f40a0ca4b?w=800&h=600&fit=crop",
                link: "#",
            },
        ],
    },
    Category {
        id: "web",
        name: "Web Apps",
        size: 140.0,
        color: [0.753, 0.518, 0.988, 1.0], // purple
        accent: [0.957, 0.447, 0.714, 1.0], // pink
        has_rings: true,
        projects: &[
            Project {
                title: "E-Commerce Platform",
                year: "2024",
                description: "Modern e-commerce platform built with React and Node.js with advanced filtering and payment integration",
                image_url: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800&h=600&fit=crop",
                link: "#",
            },
            Project {
                title: "Project Management Dashboard",
                year: "2024",
                description: "Comprehensive dashboard for team collaboration and project tracking with real-time updates",
                image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&h=600&fit=crop",
                link: "#",
            },
            Project {
                title: "Analytics Platform",
                year: "2023",
                description: "Data visualization platform with interactive charts and customizable reporting features",
                image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=600&fit=crop",
                link: "#",
            },
        ],
    },
    Category {
        id: "ux",
        name: "UX Research",
        size: 100.0,
        color: [0.290, 0.871, 0.502, 1.0], // green
        accent: [0.176, 0.831, 0.749, 1.0], // teal
        has_rings: false,
        projects: &[
            Project {
                title: "Banking App UX Study",
                year: "2024",
                description: "Comprehensive user research for mobile banking app redesign with usability testing and persona development",
                image_url: "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800&h=600&fit=crop",
                link: "#",
            },
            Project {
                title: "E-learning Platform Research",
                year: "2023",
                description: "User behavior analysis and journey mapping for online education platform optimization",
                image_url: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800&h=600&fit=crop",
                link: "#",
            },
        ],
    },
    Category {
        id: "ui",
        name: "UI Designs",
        size: 110.0,
        color: [0.984, 0.573, 0.235, 1.0], // orange
        accent: [0.973, 0.443, 0.443, 1.0], // red
        has_rings: false,
        projects: &[
            Project {
                title: "Travel App Interface",
                year: "2024",
                description: "Beautiful and intuitive UI design for travel booking app with seamless user experience",
                image_url: "https://images.unsplash.com/photo-1488646953014-85cb44e25828?w=800&h=600&fit=crop",
                link: "#",
            },
            Project {
                title: "Cryptocurrency Dashboard",
                year: "2024",
                description: "Modern dashboard design for crypto trading platform with real-time data visualization",
                image_url: "https://images.unsplash.com/photo-1611974789855-9c2a0a7236a3?w=800&h=600&fit=crop",
                link: "#",
            },
            Project {
                title: "Social Media App UI",
                year: "2023",
                description: "Clean and engaging user interface design for social networking mobile application",
                image_url: "https://images.unsplash.com/photo-1611224923853-80b023f02d71?w=800&h=600&fit=crop",
                link: "#",
            },
        ],
    },
    Category {
        id: "integrations",
        name: "Integrations",
        size: 90.0,
        color: [0.506, 0.549, 0.973, 1.0], // indigo
        accent: [0.753, 0.518, 0.988, 1.0], // purple
        has_rings: true,
        projects: &[
            Project {
                title: "Payment Gateway Integration",
                year: "2024",
                description: "Seamless integration of multiple payment providers with unified API and fraud detection",
                image_url: "https://images.unsplash.com/photo-1556742111-a301076d9d18?w=800&h=600&fit=crop",
                link: "#",
            },
            Project {
                title: "CRM System Integration",
                year: "2023",
                description: "Custom integration solution connecting multiple business systems for improved workflow",
                image_url: "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&h=600&fit=crop",
                link: "#",
            },
        ],
    },
    Category {
        id: "writeups",
        name: "Writeups",
        size: 80.0,
        color: [0.980, 0.800, 0.082, 1.0], // yellow
        accent: [0.984, 0.573, 0.235, 1.0], // orange
        has_rings: false,
        projects: &[
            Project {
                title: "Design System Documentation",
                year: "2024",
                description: "Comprehensive guide and documentation for scalable design system implementation",
                image_url: "https://images.unsplash.com/photo-1586281380349-632531db7ed4?w=800&h=600&fit=crop",
                link: "#",
            },
            Project {
                title: "UX Research Case Study",
                year: "2024",
                description: "Detailed case study documenting user research process and insights for product optimization",
                image_url: "https://images.unsplash.com/photo-1434030216411-0b793f4b4173?w=800&h=600&fit=crop",
                link: "#",
            },
            Project {
                title: "Technical Blog Series",
                year: "2023",
                description: "Educational blog posts covering modern web development practices and emerging technologies",
                image_url: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?w=800&h=600&fit=crop",
                link: "#",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_project_fills_its_gallery_card() {
        for category in CATEGORIES {
            assert!(!category.projects.is_empty());
            for project in category.projects {
                assert!(!project.title.is_empty());
                assert!(!project.year.is_empty());
                assert!(!project.description.is_empty());
                assert!(project.image_url.starts_with("https://"));
                assert!(!project.link.is_empty());
            }
        }
    }
}
