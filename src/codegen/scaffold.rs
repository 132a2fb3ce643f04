//! Fixed program text around the generated drawing calls.

/// Everything up to the first drawing call inside `display()`.
pub const HEADER: &str = "/*
 * FreeGLUT Drawing Code
 * Generated by Advanced Drawing to FreeGLUT Converter
 * 
 * To compile in CodeBlocks:
 * 1. Install FreeGLUT library
 * 2. Link libraries: -lfreeglut -lopengl32 -lglu32
 * 3. Compile and run
 */

#include <GL/glut.h>
#include <math.h>

void display() {
    glClear(GL_COLOR_BUFFER_BIT);
    glClearColor(1.0f, 1.0f, 1.0f, 1.0f);  // White background
    
";

/// Closes `display()` and adds `init()` and `main()`.
pub const FOOTER: &str = "
    glFlush();
}

void init() {
    glMatrixMode(GL_PROJECTION);
    glLoadIdentity();
    gluOrtho2D(-1.0, 1.0, -1.0, 1.0);
    glMatrixMode(GL_MODELVIEW);
    glEnable(GL_LINE_SMOOTH);
    glEnable(GL_POINT_SMOOTH);
    glHint(GL_LINE_SMOOTH_HINT, GL_NICEST);
    glHint(GL_POINT_SMOOTH_HINT, GL_NICEST);
}

int main(int argc, char** argv) {
    glutInit(&argc, argv);
    glutInitDisplayMode(GLUT_SINGLE | GLUT_RGB);
    glutInitWindowSize(800, 600);
    glutInitWindowPosition(100, 100);
    glutCreateWindow(\"Generated Drawing\");
    
    init();
    glutDisplayFunc(display);
    
    glutMainLoop();
    return 0;
}
";
