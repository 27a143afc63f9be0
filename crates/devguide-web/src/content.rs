//! Static content for the setup guide page.
//!
//! All instructional text lives here as plain data so the page components
//! stay purely presentational. Step ids double as the keys for the
//! copy-status tracker and must be unique across the whole guide.

/// One tool the reader needs before starting.
pub struct Prerequisite {
    pub name: &'static str,
    pub detail: &'static str,
    /// Command that verifies the installation.
    pub check_command: &'static str,
}

/// One copyable command with its surrounding explanation.
pub struct CommandStep {
    /// Stable id, unique across the guide. Keys the copied indicator.
    pub id: &'static str,
    pub description: &'static str,
    pub command: &'static str,
    pub note: Option<&'static str>,
    pub expected_outcome: Option<&'static str>,
}

/// A numbered section of the guide with its command steps.
pub struct GuideSection {
    /// Anchor id for in-page links.
    pub id: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub steps: &'static [CommandStep],
}

pub struct Guide {
    pub title: &'static str,
    pub tagline: &'static str,
    pub prerequisites_intro: &'static str,
    pub prerequisites: &'static [Prerequisite],
    pub prerequisites_outro: &'static str,
    pub sections: &'static [GuideSection],
    pub footer_copyright: &'static str,
    pub footer_note: &'static str,
}

pub static GUIDE: Guide = Guide {
    title: "Comprehensive Developer Guide",
    tagline: "Your step-by-step instructions to get the project environment fully operational, \
              from database setup to production launch.",

    prerequisites_intro: "Before you begin, please ensure you have the following software \
                          installed and configured on your system. These tools are essential \
                          for the development and deployment of this project.",
    prerequisites: &[
        Prerequisite {
            name: "Node.js",
            detail: "Version 18.x or higher.",
            check_command: "node -v",
        },
        Prerequisite {
            name: "npm",
            detail: "Version 9.x or higher, usually comes with Node.js.",
            check_command: "npm -v",
        },
        Prerequisite {
            name: "Docker",
            detail: "Latest stable version for running containerized services like PostgreSQL.",
            check_command: "docker --version",
        },
        Prerequisite {
            name: "Git",
            detail: "For version control and cloning the repository.",
            check_command: "git --version",
        },
    ],
    prerequisites_outro: "If you're missing any of these, please install them from their \
                          official websites. Ensure Docker Desktop is running before \
                          proceeding with database setup.",

    sections: &[
        GuideSection {
            id: "database",
            title: "1. Start Postgres Database",
            intro: "This project utilizes a PostgreSQL database managed via Docker. Docker \
                    ensures a consistent and isolated database environment across different \
                    machines. The following steps will guide you through starting the \
                    database container.",
            steps: &[
                CommandStep {
                    id: "db-step1",
                    description: "First, navigate into the 'docker' directory located at the \
                                  root of your project. This directory contains the \
                                  'docker-compose.yml' file, which defines the configuration \
                                  for our PostgreSQL service, including image, ports, and \
                                  volumes.",
                    command: "cd docker",
                    note: None,
                    expected_outcome: Some(
                        "Your terminal prompt should now reflect that you are inside the \
                         'docker' directory.",
                    ),
                },
                CommandStep {
                    id: "db-step2",
                    description: "Execute this command to build (if it's the first time or if \
                                  changes were made to the Dockerfile/image) and start the \
                                  PostgreSQL service defined in 'docker-compose.yml'. The \
                                  '-d' (detached) flag runs the container in the background, \
                                  so your terminal remains free.",
                    command: "docker compose up -d",
                    note: Some(
                        "If you omit the '-d' flag (i.e., 'docker compose up'), the container \
                         logs will stream directly to your terminal. You can stop it with \
                         Ctrl+C. To check if the container is running in detached mode, use \
                         'docker ps'.",
                    ),
                    expected_outcome: Some(
                        "You should see messages indicating that the Postgres container is \
                         being created/started. If successful, 'docker ps' will list \
                         'ned-tech-web-db-1' (or similar) as running.",
                    ),
                },
            ],
        },
        GuideSection {
            id: "migrations",
            title: "2. Run Database Migrations",
            intro: "Once the database container is running, you need to apply the database \
                    schema migrations. Migrations are version-controlled changes to your \
                    database structure, ensuring it aligns with the application's data \
                    models.",
            steps: &[CommandStep {
                id: "migrate-step1",
                description: "Return to the root directory of your project. This command \
                              executes the development database migration script defined in \
                              your 'package.json'. It typically uses an ORM tool (like \
                              Drizzle ORM) to apply pending migration files to the database \
                              schema, creating tables and columns as needed.",
                command: "npm run db:dev-migrate",
                note: Some(
                    "Ensure you are in the project's root directory (you might need to 'cd \
                     ..' if you are still in the 'docker' directory). Also, verify that your \
                     '.env' file has the correct database connection string (DB_URL). \
                     Migrations might fail if the database is not accessible or if there are \
                     errors in the migration files.",
                ),
                expected_outcome: Some(
                    "The terminal should output logs from the migration tool, indicating \
                     which migration files are being applied. A success message usually \
                     appears at the end, confirming that the database schema is up to date.",
                ),
            }],
        },
        GuideSection {
            id: "dev-server",
            title: "3. Start Development Server",
            intro: "With the database prepared, you can now start the local development \
                    server. This server allows you to view your application in a browser, \
                    and it typically includes features like hot module replacement (HMR) for \
                    a fast development feedback loop.",
            steps: &[CommandStep {
                id: "dev-step1",
                description: "This command, executed from the project root, starts the \
                              Next.js development server. It compiles the application, \
                              watches for file changes, and serves the content, usually on \
                              port 3000.",
                command: "npm run dev",
                note: Some(
                    "The terminal will display the local URL (e.g., http://localhost:3000) \
                     where the application is accessible. Any changes you make to the \
                     frontend or backend code (that Next.js handles) should automatically \
                     trigger a recompilation and browser refresh.",
                ),
                expected_outcome: Some(
                    "You will see output in the terminal indicating that the server has \
                     started successfully, often including the local address (e.g., 'ready - \
                     started server on 0.0.0.0:3000, url: http://localhost:3000'). Opening \
                     this URL in your browser should display the application.",
                ),
            }],
        },
        GuideSection {
            id: "production",
            title: "4. Build & Run for Production",
            intro: "When you are ready to deploy your application to a live environment, you \
                    must first create an optimized production build. This build is then \
                    served by a production-ready server.",
            steps: &[
                CommandStep {
                    id: "prod-build",
                    description: "This command, run from the project root, triggers the \
                                  Next.js production build process. It compiles your \
                                  application into highly optimized static assets (HTML, \
                                  CSS, JavaScript) and server-side code. The output is \
                                  typically placed in the '.next' directory.",
                    command: "npm run build",
                    note: Some(
                        "The build process can take some time, especially for larger \
                         applications, as it involves various optimizations like code \
                         splitting, minification, and tree-shaking. Ensure there are no \
                         build errors reported in the terminal.",
                    ),
                    expected_outcome: Some(
                        "The terminal will show the build progress and, upon completion, \
                         often provides a summary of the generated page types (static, \
                         server-rendered, etc.). A '.next' folder will be created or updated \
                         in your project root.",
                    ),
                },
                CommandStep {
                    id: "prod-start",
                    description: "After a successful build, this command starts the Next.js \
                                  production server. This server is designed for performance \
                                  and stability, serving the optimized assets generated by \
                                  the build process.",
                    command: "npm run start",
                    note: Some(
                        "This command should be used in your deployment environment (e.g., \
                         on a server or PaaS). It typically runs on a specific port (often \
                         3000 by default, but configurable). Unlike the development server, \
                         it does not watch for file changes.",
                    ),
                    expected_outcome: Some(
                        "The terminal will indicate that the production server has started, \
                         along with the URL it's listening on. The application should now be \
                         accessible via this URL, running in its optimized production mode.",
                    ),
                },
            ],
        },
    ],

    footer_copyright: "\u{00A9} 2025 Next-Elysia-Drizzle Stack. Crafted with Passion.",
    footer_note: "This guide provides essential setup steps. For advanced configurations, \
                  troubleshooting, or architectural details, please consult the project \
                  README or specific module documentation.",
};

impl Guide {
    /// Every command step across all sections, in display order.
    pub fn all_steps(&self) -> impl Iterator<Item = &'static CommandStep> {
        self.sections.iter().flat_map(|s| s.steps.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn step_ids_are_unique_and_nonempty() {
        let mut seen = HashSet::new();
        for step in GUIDE.all_steps() {
            assert!(!step.id.is_empty(), "step id must be non-empty");
            assert!(seen.insert(step.id), "duplicate step id: {}", step.id);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn commands_are_nonempty() {
        for step in GUIDE.all_steps() {
            assert!(!step.command.trim().is_empty(), "empty command in {}", step.id);
        }
        for p in GUIDE.prerequisites {
            assert!(!p.check_command.trim().is_empty());
        }
    }

    #[test]
    fn section_anchors_are_unique() {
        let mut seen = HashSet::new();
        for section in GUIDE.sections {
            assert!(seen.insert(section.id), "duplicate section id: {}", section.id);
        }
    }
}
