mod collide2;
